//! Read-only view on terms.
//!
//! All term representations in this crate
//! (the unshared [`Molecule`](crate::Molecule) as well as
//! the shared terms in [`rc`](crate::rc) and [`arc`](crate::arc))
//! implement [`Tree`], which gives them the queries that
//! only need to look at a term, such as finding wildcards.

use crate::{Address, Dir};
use alloc::vec::Vec;
use core::fmt;

/// Name of the atom that terminates lists.
pub const NIL: &str = "nil";

/// Return true if the atom name denotes a wildcard.
///
/// ~~~
/// # use vau::is_wildcard;
/// assert!(is_wildcard("@x"));
/// assert!(!is_wildcard("x"));
/// ~~~
pub fn is_wildcard(name: &str) -> bool {
    name.starts_with('@')
}

/// One layer of a term.
pub enum View<'a, T> {
    Atom(&'a str),
    Pair(&'a T, &'a T),
}

/// A binary tree whose leaves are atoms.
pub trait Tree: Sized {
    /// Expose the outermost layer of the term.
    fn view(&self) -> View<'_, Self>;

    /// Return the child in the given direction, if the term is a pair.
    fn child(&self, dir: Dir) -> Option<&Self> {
        match (self.view(), dir) {
            (View::Pair(l, _), Dir::Left) => Some(l),
            (View::Pair(_, r), Dir::Right) => Some(r),
            (View::Atom(_), _) => None,
        }
    }

    /// Return true if following the address never descends into an atom.
    ///
    /// ~~~
    /// # use vau::{Dir, Molecule, Tree};
    /// let m = Molecule::pair(Molecule::atom("a"), Molecule::atom("b"));
    /// assert!(m.is_valid_address(&[]));
    /// assert!(m.is_valid_address(&[Dir::Right]));
    /// assert!(!m.is_valid_address(&[Dir::Right, Dir::Left]));
    /// ~~~
    fn is_valid_address(&self, address: &[Dir]) -> bool {
        address
            .iter()
            .try_fold(self, |tm, dir| tm.child(*dir))
            .is_some()
    }

    /// Iterate over all atoms of the term, from left to right,
    /// together with their addresses.
    fn leaves(&self) -> Leaves<'_, Self> {
        Leaves {
            stack: Vec::from([(Address::new(), self)]),
        }
    }

    /// Return the names of all wildcards in the term, from left to right.
    ///
    /// A name occurs as many times as the wildcard occurs in the term.
    fn wildcards(&self) -> Vec<&str> {
        let leaves = self.leaves().map(|(_, name)| name);
        leaves.filter(|name| is_wildcard(name)).collect()
    }

    /// Return true if any atom of the term is a wildcard.
    ///
    /// This is used to prevent inserting templates into concrete terms.
    fn contains_wildcard(&self) -> bool {
        self.leaves().any(|(_, name)| is_wildcard(name))
    }

    /// Return the addresses of all occurrences of the given wildcard,
    /// from left to right.
    ///
    /// This tells where a captured subterm lands in a replacement.
    ///
    /// ~~~
    /// # use vau::{Address, Dir, Molecule, Tree};
    /// let x = || Molecule::atom("@x");
    /// let template = Molecule::pair(x(), Molecule::pair(Molecule::atom("@y"), x()));
    /// let right = Address::new().child(Dir::Right);
    /// assert_eq!(
    ///     template.binding_addresses("@x"),
    ///     vec![Address::new().child(Dir::Left), right.child(Dir::Right)]
    /// );
    /// assert!(template.binding_addresses("@z").is_empty());
    /// ~~~
    fn binding_addresses(&self, name: &str) -> Vec<Address> {
        let leaves = self.leaves().filter(|(_, n)| is_wildcard(n) && *n == name);
        leaves.map(|(addr, _)| addr).collect()
    }

    /// Return the number of nodes (atoms and pairs) of the term.
    fn size(&self) -> usize {
        let mut stack = Vec::from([self]);
        let mut size = 0;
        while let Some(tm) = stack.pop() {
            size += 1;
            if let View::Pair(l, r) = tm.view() {
                stack.push(r);
                stack.push(l);
            }
        }
        size
    }
}

/// Iterator over the atoms of a term, see [`Tree::leaves`].
pub struct Leaves<'a, T> {
    stack: Vec<(Address, &'a T)>,
}

impl<'a, T: Tree> Iterator for Leaves<'a, T> {
    type Item = (Address, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((addr, tm)) = self.stack.pop() {
            match tm.view() {
                View::Atom(name) => return Some((addr, name)),
                View::Pair(l, r) => {
                    // push right first to visit left first
                    self.stack.push((addr.child(Dir::Right), r));
                    self.stack.push((addr.child(Dir::Left), l));
                }
            }
        }
        None
    }
}

/// Print a term as S-expression.
///
/// A pair whose right spine ends in [`NIL`] is printed as list,
/// e.g. `(a b c)`; otherwise, the last element is preceded by a dot,
/// e.g. `(a b . c)`.
pub fn format<T: Tree>(tm: &T, f: &mut fmt::Formatter) -> fmt::Result {
    let (head, mut tail) = match tm.view() {
        View::Atom(name) => return write!(f, "{}", name),
        View::Pair(l, r) => (l, r),
    };
    write!(f, "(")?;
    format(head, f)?;
    loop {
        match tail.view() {
            View::Pair(l, r) => {
                write!(f, " ")?;
                format(l, f)?;
                tail = r;
            }
            View::Atom(NIL) => break,
            View::Atom(name) => {
                write!(f, " . {}", name)?;
                break;
            }
        }
    }
    write!(f, ")")
}
