use crate::Tree;
use core::fmt::{self, Display};
use fnv::FnvHashSet;

/// Rewrite rule.
///
/// A term matching the left-hand side is replaced by the right-hand side,
/// where wildcards are replaced by the subterms they captured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule<Tm> {
    /// left-hand side (pattern to match with)
    pub lhs: Tm,
    /// right-hand side (term to replace with)
    pub rhs: Tm,
}

impl<Tm> Rule<Tm> {
    pub fn new(lhs: Tm, rhs: Tm) -> Self {
        Self { lhs, rhs }
    }

    pub fn map<Tm2>(self, f: impl Fn(Tm) -> Tm2) -> Rule<Tm2> {
        Rule::new(f(self.lhs), f(self.rhs))
    }
}

impl<Tm: Tree> Rule<Tm> {
    /// Return true if the rule uses its wildcards consistently, meaning that
    /// no wildcard occurs more than once on the left-hand side, and
    /// every wildcard on the right-hand side also occurs on the left-hand side.
    ///
    /// Matching and substitution also work on invalid rules,
    /// but they may not yield what the rule's author intended.
    ///
    /// ~~~
    /// # use vau::{Molecule, Rule};
    /// let (a, p) = (Molecule::atom, Molecule::pair);
    /// let swap = Rule::new(p(a("@h"), a("@t")), p(a("@t"), a("@h")));
    /// assert!(swap.is_valid());
    ///
    /// // duplicate wildcard on the left-hand side
    /// assert!(!Rule::new(p(a("@a"), a("@a")), a("@a")).is_valid());
    /// // orphan wildcard on the right-hand side
    /// assert!(!Rule::new(a("@a"), p(a("@a"), a("@b"))).is_valid());
    /// ~~~
    pub fn is_valid(&self) -> bool {
        let mut captured = FnvHashSet::default();
        for name in self.lhs.wildcards() {
            if !captured.insert(name) {
                debug!("wildcard {} is captured more than once", name);
                return false;
            }
        }
        for name in self.rhs.wildcards() {
            if !captured.contains(name) {
                debug!("wildcard {} is never captured", name);
                return false;
            }
        }
        true
    }
}

impl<Tm: Display> Display for Rule<Tm> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ⟶ {}", self.lhs, self.rhs)
    }
}
