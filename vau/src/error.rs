//! Common error type.

use crate::Address;
use core::fmt::{self, Display};

/// Common error type.
///
/// `NoMatch` and `NoApplicableSite` are regular outcomes of rewriting,
/// which callers are expected to handle.
/// `InvalidAddress` hints at a bug in the bookkeeping of addresses,
/// because all addresses should either be obtained from this crate or
/// be checked with [`Tree::is_valid_address`](crate::Tree::is_valid_address).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// the address descends into an atom
    InvalidAddress(Address),
    /// the pattern does not match the term
    NoMatch,
    /// the pattern does not match any subterm of the term
    NoApplicableSite,
    /// a rule can only be made from a pair
    RuleNotPair,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidAddress(addr) => write!(f, "invalid address {}", addr),
            Self::NoMatch => write!(f, "pattern does not match"),
            Self::NoApplicableSite => write!(f, "pattern does not match any subterm"),
            Self::RuleNotPair => write!(f, "rule is not a pair"),
        }
    }
}
