//! Unshared terms.

use crate::tree::{self, Tree, View, NIL};
use alloc::{boxed::Box, string::String};
use core::fmt::{self, Display};

/// Term that owns all its subterms.
///
/// Unlike the terms in [`rc`](crate::rc) and [`arc`](crate::arc),
/// molecules do not share subterms.
/// This makes them suitable to describe terms independently of a kernel,
/// for example to send them between threads and
/// then convert them to the kernel that processes them.
///
/// ~~~
/// # use vau::Molecule;
/// use vau::rc::Term;
/// let m = Molecule::pair(Molecule::atom("a"), Molecule::atom("@b"));
/// let tm = Term::from(&m);
/// assert_eq!(Molecule::from(&tm), m);
/// ~~~
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Molecule {
    Atom(String),
    Pair(Box<Molecule>, Box<Molecule>),
}

impl Molecule {
    /// Construct an atom.
    ///
    /// # Panics
    ///
    /// If the name is empty.
    pub fn atom(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "atom names must not be empty");
        Self::Atom(name)
    }

    /// Construct a pair.
    pub fn pair(left: Self, right: Self) -> Self {
        Self::Pair(Box::new(left), Box::new(right))
    }

    /// Construct a list, terminated by [`NIL`].
    ///
    /// ~~~
    /// # use vau::Molecule;
    /// let l = Molecule::list([Molecule::atom("a"), Molecule::atom("b")]);
    /// let nil = Molecule::atom("nil");
    /// let ab = Molecule::pair(Molecule::atom("a"), Molecule::pair(Molecule::atom("b"), nil));
    /// assert_eq!(l, ab);
    /// ~~~
    pub fn list<I>(elems: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        I::IntoIter: DoubleEndedIterator,
    {
        let nil = Self::atom(NIL);
        elems.into_iter().rev().fold(nil, |acc, x| Self::pair(x, acc))
    }
}

impl Tree for Molecule {
    fn view(&self) -> View<'_, Self> {
        match self {
            Self::Atom(name) => View::Atom(name.as_str()),
            Self::Pair(l, r) => View::Pair(&**l, &**r),
        }
    }
}

impl Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        tree::format(self, f)
    }
}
