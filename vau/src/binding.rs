use crate::Address;
use core::fmt::{self, Display};

/// Subterm captured by a wildcard during pattern matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding<S, Tm> {
    /// name of the wildcard, including the leading `@`
    pub name: S,
    /// position of the wildcard in the matched term
    pub address: Address,
    /// captured subterm
    pub value: Tm,
}

impl<S: Display, Tm: Display> Display for Binding<S, Tm> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ↦ {} at {}", self.name, self.value, self.address)
    }
}
