//! Terms with shared subterms.

use super::{Rc, Rule};
use crate::tree::{self, Tree, View, NIL};
use crate::{Dir, Error, Molecule};
use core::fmt::{self, Display};

/// Term with shared subterms.
///
/// Cloning a term is cheap, because it only increases a reference count.
/// Terms are never mutated; instead, operations that "modify" a term
/// return a new term that shares all unmodified subterms with the old one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Atom(Rc<str>),
    Pair(Rc<Pair>),
}

/// Inner node of a term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pair {
    pub left: Term,
    pub right: Term,
}

impl Term {
    /// Construct an atom.
    ///
    /// # Panics
    ///
    /// If the name is empty.
    pub fn atom(name: &str) -> Self {
        assert!(!name.is_empty(), "atom names must not be empty");
        Self::Atom(Rc::from(name))
    }

    /// Construct a pair.
    pub fn pair(left: Self, right: Self) -> Self {
        Self::Pair(Rc::new(Pair { left, right }))
    }

    /// Construct a list, terminated by `nil`.
    pub fn list<I>(elems: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        I::IntoIter: DoubleEndedIterator,
    {
        let nil = Self::atom(NIL);
        elems.into_iter().rev().fold(nil, |acc, x| Self::pair(x, acc))
    }

    pub fn get_atom(&self) -> Option<&str> {
        match self {
            Self::Atom(name) => Some(&**name),
            Self::Pair(_) => None,
        }
    }

    pub fn get_pair(&self) -> Option<&Pair> {
        match self {
            Self::Atom(_) => None,
            Self::Pair(pair) => Some(&**pair),
        }
    }

    /// Copy the term such that it shares no node with the original.
    pub fn deep_clone(&self) -> Self {
        match self {
            Self::Atom(name) => Self::atom(name),
            Self::Pair(p) => Self::pair(p.left.deep_clone(), p.right.deep_clone()),
        }
    }

    /// Compare the memory addresses of two terms.
    ///
    /// If this returns true, then the terms are also structurally equal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Atom(a1), Self::Atom(a2)) => Rc::ptr_eq(a1, a2),
            (Self::Pair(p1), Self::Pair(p2)) => Rc::ptr_eq(p1, p2),
            _ => false,
        }
    }

    /// Return the subterm at the given address.
    ///
    /// ~~~
    /// # use vau::{Dir, Error};
    /// # use vau::rc::Term;
    /// let tm = Term::pair(Term::atom("a"), Term::atom("b"));
    /// assert_eq!(tm.get(&[])?, &tm);
    /// assert_eq!(tm.get(&[Dir::Right])?, &Term::atom("b"));
    /// assert!(tm.get(&[Dir::Right, Dir::Left]).is_err());
    /// # Ok::<_, Error>(())
    /// ~~~
    pub fn get(&self, address: &[Dir]) -> Result<&Self, Error> {
        address
            .iter()
            .try_fold(self, |tm, dir| tm.child(*dir))
            .ok_or_else(|| Error::InvalidAddress(address.into()))
    }

    /// Return a copy of the term where the subterm at the given address
    /// is replaced by `value`.
    ///
    /// Only the nodes on the path to the address are copied;
    /// all other subterms are shared with the original term.
    ///
    /// ~~~
    /// # use vau::{Dir, Error};
    /// # use vau::rc::Term;
    /// let tm = Term::pair(Term::atom("a"), Term::atom("b"));
    /// let c = Term::atom("c");
    /// assert_eq!(tm.set(&[], c.clone())?, c);
    /// assert_eq!(tm.set(&[Dir::Left], c.clone())?, Term::pair(c.clone(), Term::atom("b")));
    /// assert!(tm.set(&[Dir::Left, Dir::Left], c).is_err());
    /// # Ok::<_, Error>(())
    /// ~~~
    pub fn set(&self, address: &[Dir], value: Self) -> Result<Self, Error> {
        self.replace(address, value)
            .ok_or_else(|| Error::InvalidAddress(address.into()))
    }

    fn replace(&self, address: &[Dir], value: Self) -> Option<Self> {
        let (dir, rest) = match address.split_first() {
            None => return Some(value),
            Some(split) => split,
        };
        let Pair { left, right } = self.get_pair()?;
        Some(match dir {
            Dir::Left => Self::pair(left.replace(rest, value)?, right.clone()),
            Dir::Right => Self::pair(left.clone(), right.replace(rest, value)?),
        })
    }
}

impl Tree for Term {
    fn view(&self) -> View<'_, Self> {
        match self {
            Self::Atom(name) => View::Atom(&**name),
            Self::Pair(p) => View::Pair(&p.left, &p.right),
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        tree::format(self, f)
    }
}

impl From<&Molecule> for Term {
    fn from(m: &Molecule) -> Self {
        match m {
            Molecule::Atom(name) => Self::atom(name),
            Molecule::Pair(l, r) => Self::pair(Self::from(&**l), Self::from(&**r)),
        }
    }
}

impl From<&Term> for Molecule {
    fn from(tm: &Term) -> Self {
        match tm {
            Term::Atom(name) => Self::atom(&**name),
            Term::Pair(p) => Self::pair(Self::from(&p.left), Self::from(&p.right)),
        }
    }
}

impl From<&crate::Rule<Molecule>> for Rule {
    fn from(rule: &crate::Rule<Molecule>) -> Self {
        Self::new(Term::from(&rule.lhs), Term::from(&rule.rhs))
    }
}

/// A pair is a rule with its left component as pattern and
/// its right component as replacement.
impl TryFrom<Term> for Rule {
    type Error = Error;

    fn try_from(tm: Term) -> Result<Self, Self::Error> {
        let pair = tm.get_pair().ok_or(Error::RuleNotPair)?;
        Ok(Self::new(pair.left.clone(), pair.right.clone()))
    }
}

impl From<Rule> for Term {
    fn from(rule: Rule) -> Self {
        Self::pair(rule.lhs, rule.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Address;
    use alloc::string::ToString;

    fn a(s: &str) -> Term {
        Term::atom(s)
    }

    fn p(l: Term, r: Term) -> Term {
        Term::pair(l, r)
    }

    fn sample() -> Term {
        p(p(a("2"), a("3")), p(a("1"), p(a("@x"), a("4"))))
    }

    #[test]
    fn equality() {
        assert_eq!(a("x"), a("x"));
        assert_ne!(a("x"), a("y"));
        assert_ne!(a("x"), p(a("x"), a("x")));
        assert_eq!(sample(), sample());
        assert_ne!(p(a("1"), a("2")), p(a("2"), a("1")));
        // wildcards are just atoms for equality
        assert_eq!(a("@x"), a("@x"));
        assert_ne!(a("@x"), a("x"));
    }

    #[test]
    fn deep_clone_shares_nothing() {
        let tm = sample();
        let copy = tm.deep_clone();
        assert_eq!(tm, copy);
        assert!(!tm.ptr_eq(&copy));
        let (l1, l2) = (tm.get(&[Dir::Left]).unwrap(), copy.get(&[Dir::Left]).unwrap());
        assert!(!l1.ptr_eq(l2));
        assert!(tm.clone().ptr_eq(&tm));
    }

    #[test]
    fn get_set_roundtrip() {
        let tm = sample();
        for (addr, _) in tm.leaves() {
            let mut addr = addr;
            loop {
                let sub = tm.get(&addr).unwrap().clone();
                assert_eq!(tm.set(&addr, sub).unwrap(), tm);
                if addr.pop().is_none() {
                    break;
                }
            }
        }
    }

    #[test]
    fn set_shares_siblings() {
        let tm = sample();
        let new = tm.set(&[Dir::Right, Dir::Left], a("0")).unwrap();
        assert_eq!(new.to_string(), "((2 . 3) 0 @x . 4)");
        let left = |t: &Term| t.get(&[Dir::Left]).unwrap().clone();
        assert!(left(&tm).ptr_eq(&left(&new)));
        let rr = |t: &Term| t.get(&[Dir::Right, Dir::Right]).unwrap().clone();
        assert!(rr(&tm).ptr_eq(&rr(&new)));
        // the original is untouched
        assert_eq!(tm, sample());
    }

    #[test]
    fn invalid_address() {
        let tm = sample();
        let addr = [Dir::Left, Dir::Left, Dir::Right];
        let err = Error::InvalidAddress(Address::from(&addr[..]));
        assert_eq!(tm.get(&addr), Err(err.clone()));
        assert_eq!(tm.set(&addr, a("0")), Err(err));
        assert!(!tm.is_valid_address(&addr));
        assert!(tm.is_valid_address(&addr[..2]));
    }

    #[test]
    fn molecule_roundtrip() {
        let tm = sample();
        let m = Molecule::from(&tm);
        assert_eq!(m.to_string(), tm.to_string());
        assert_eq!(Term::from(&m), tm);
    }

    #[test]
    fn rule_from_pair() {
        let rule = Rule::try_from(p(a("@x"), a("y"))).unwrap();
        assert_eq!(rule, Rule::new(a("@x"), a("y")));
        assert_eq!(Term::from(rule), p(a("@x"), a("y")));
        assert_eq!(Rule::try_from(a("x")), Err(Error::RuleNotPair));
    }

    #[test]
    fn list() {
        assert_eq!(Term::list([]), a("nil"));
        assert_eq!(Term::list([a("1"), a("2")]), p(a("1"), p(a("2"), a("nil"))));
    }

    #[test]
    #[should_panic]
    fn empty_atom() {
        Term::atom("");
    }
}
