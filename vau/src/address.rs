//! Paths from the root of a term to one of its subterms.

use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::iter::FromIterator;

/// Direction to descend into a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Left,
    Right,
}

/// Root-relative path to a subterm.
///
/// The empty address denotes the whole term.
/// An address is valid for a term if following it from the root
/// never attempts to descend into an atom.
///
/// ~~~
/// # use vau::{Address, Dir};
/// let addr = Address::new().child(Dir::Left).child(Dir::Right);
/// assert_eq!(addr.to_string(), "LR");
/// assert_eq!(Address::new().to_string(), "ε");
/// ~~~
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Address(Vec<Dir>);

impl Address {
    /// The address of the root.
    pub fn new() -> Self {
        Default::default()
    }

    /// Return the address of the given child of the node at this address.
    pub fn child(&self, dir: Dir) -> Self {
        let mut dirs = Vec::with_capacity(self.0.len() + 1);
        dirs.extend_from_slice(&self.0);
        dirs.push(dir);
        Self(dirs)
    }

    /// Descend one level further.
    pub fn push(&mut self, dir: Dir) {
        self.0.push(dir)
    }

    /// Ascend one level, returning the last direction.
    pub fn pop(&mut self) -> Option<Dir> {
        self.0.pop()
    }

    /// Return true if `self` is a (not necessarily proper) prefix of `other`,
    /// meaning that the node at `other` lies in the subterm at `self`.
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl core::ops::Deref for Address {
    type Target = [Dir];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Dir>> for Address {
    fn from(dirs: Vec<Dir>) -> Self {
        Self(dirs)
    }
}

impl From<&[Dir]> for Address {
    fn from(dirs: &[Dir]) -> Self {
        Self(dirs.to_vec())
    }
}

impl FromIterator<Dir> for Address {
    fn from_iter<I: IntoIterator<Item = Dir>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
        }
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "ε");
        }
        self.0.iter().try_for_each(|dir| dir.fmt(f))
    }
}
