//! Application of rewrite rules.

use super::{Binding, Rule, Term};
use crate::{Address, Dir, Error};
use alloc::{collections::VecDeque, vec::Vec};

/// Result of rewriting a term at its root.
#[derive(Clone, Debug)]
pub struct Rewrite {
    /// rewritten term
    pub term: Term,
    /// subterms captured by the rule's pattern
    pub bindings: Vec<Binding>,
}

/// Result of rewriting a subterm.
#[derive(Clone, Debug)]
pub struct Site {
    /// address of the rewritten subterm
    pub bound_at: Address,
    /// whole term after rewriting
    pub term: Term,
    /// subterms captured by the rule's pattern,
    /// with addresses relative to `bound_at`
    pub bindings: Vec<Binding>,
}

impl Term {
    /// Rewrite the whole term with a rule,
    /// failing with [`Error::NoMatch`] if the rule's pattern does not match.
    ///
    /// The term itself is never changed.
    pub fn apply_once(&self, rule: &Rule) -> Result<Rewrite, Error> {
        let bindings = self.matches(&rule.lhs).ok_or(Error::NoMatch)?;
        let term = rule.rhs.substitute(&bindings);
        Ok(Rewrite { term, bindings })
    }

    /// Rewrite the first subterm that matches the rule's pattern,
    /// failing with [`Error::NoApplicableSite`] if there is no such subterm.
    ///
    /// Subterms are visited breadth-first, from left to right.
    /// That means that the rewritten subterm is the one
    /// closest to the root, and of these, the leftmost.
    ///
    /// ~~~
    /// # use vau::{Address, Dir, Error};
    /// use vau::rc::{Rule, Term};
    /// let (a, p) = (Term::atom, Term::pair);
    /// let tm = p(p(a("2"), a("3")), p(a("1"), a("4")));
    /// let rule = Rule::new(p(a("1"), a("@y")), a("@y"));
    ///
    /// let site = tm.apply_anywhere(&rule)?;
    /// assert_eq!(site.bound_at, Address::new().child(Dir::Right));
    /// assert_eq!(site.term, p(p(a("2"), a("3")), a("4")));
    ///
    /// let rule = Rule::new(p(a("5"), a("@y")), a("@y"));
    /// assert_eq!(tm.apply_anywhere(&rule).unwrap_err(), Error::NoApplicableSite);
    /// # Ok::<_, Error>(())
    /// ~~~
    pub fn apply_anywhere(&self, rule: &Rule) -> Result<Site, Error> {
        let mut queue = VecDeque::from([(Address::new(), self)]);
        while let Some((addr, tm)) = queue.pop_front() {
            match tm.apply_once(rule) {
                Ok(Rewrite { term, bindings }) => {
                    debug!("rewrite at {}: {} ⟶ {}", addr, tm, term);
                    let term = self.set(&addr, term)?;
                    let bound_at = addr;
                    return Ok(Site { bound_at, term, bindings });
                }
                Err(Error::NoMatch) => {
                    if let Some(pair) = tm.get_pair() {
                        queue.push_back((addr.child(Dir::Left), &pair.left));
                        queue.push_back((addr.child(Dir::Right), &pair.right));
                    }
                }
                Err(e) => return Err(e),
            }
        }
        Err(Error::NoApplicableSite)
    }
}
