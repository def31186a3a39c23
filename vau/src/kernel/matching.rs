//! Pattern matching.

use super::{Binding, Term};
use crate::{is_wildcard, Address, Dir};
use alloc::vec::Vec;

impl Term {
    /// Match the term against a pattern,
    /// returning the subterms captured by the pattern's wildcards.
    ///
    /// A literal atom in the pattern matches only the same atom,
    /// a wildcard matches any term, and
    /// a pair matches a pair whose components match.
    /// The bindings are ordered from left to right by wildcard position.
    /// There is no backtracking, and a wildcard occurring multiple times
    /// produces one binding per occurrence, without requiring the
    /// captured subterms to be equal.
    ///
    /// ~~~
    /// # use vau::{Address, Dir};
    /// use vau::rc::Term;
    /// let (a, p) = (Term::atom, Term::pair);
    /// let tm = p(a("f"), p(a("x"), a("y")));
    ///
    /// let bindings = tm.matches(&p(a("f"), a("@arg"))).unwrap();
    /// assert_eq!(bindings.len(), 1);
    /// assert_eq!(&*bindings[0].name, "@arg");
    /// assert_eq!(bindings[0].address, Address::new().child(Dir::Right));
    /// assert_eq!(bindings[0].value, p(a("x"), a("y")));
    ///
    /// assert!(tm.matches(&p(a("g"), a("@arg"))).is_none());
    /// ~~~
    pub fn matches(&self, pattern: &Term) -> Option<Vec<Binding>> {
        self.matches_at(pattern, Address::new())
    }

    /// Match the term against a pattern,
    /// assuming that the term is located at the given address.
    ///
    /// The addresses of the resulting bindings are prefixed by `address`.
    pub fn matches_at(&self, pattern: &Term, address: Address) -> Option<Vec<Binding>> {
        let mut bindings = Vec::new();
        let mut todo = Vec::from([(self, pattern, address)]);
        while let Some((tm, pat, mut addr)) = todo.pop() {
            match (tm, pat) {
                (_, Term::Atom(name)) if is_wildcard(name) => {
                    trace!("match: {} ↦ {} at {}", name, tm, addr);
                    let name = name.clone();
                    let value = tm.clone();
                    bindings.push(Binding { name, address: addr, value })
                }
                (Term::Atom(a1), Term::Atom(a2)) if a1 == a2 => (),
                (Term::Pair(tp), Term::Pair(pp)) => {
                    // right is pushed first such that left is matched first
                    todo.push((&tp.right, &pp.right, addr.child(Dir::Right)));
                    addr.push(Dir::Left);
                    todo.push((&tp.left, &pp.left, addr));
                }
                _ => {
                    trace!("match: {} does not match {} at {}", tm, pat, addr);
                    return None;
                }
            }
        }
        Some(bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn a(s: &str) -> Term {
        Term::atom(s)
    }

    fn p(l: Term, r: Term) -> Term {
        Term::pair(l, r)
    }

    fn show(bindings: &[Binding]) -> Vec<alloc::string::String> {
        bindings.iter().map(|b| b.to_string()).collect()
    }

    #[test]
    fn literal_atom() {
        assert_eq!(a("x").matches(&a("x")), Some(Vec::new()));
        assert_eq!(a("x").matches(&a("y")), None);
        assert_eq!(p(a("x"), a("y")).matches(&a("x")), None);
    }

    #[test]
    fn wildcard_matches_anything() {
        let tm = p(a("x"), a("y"));
        let bindings = tm.matches(&a("@all")).unwrap();
        assert_eq!(show(&bindings), ["@all ↦ (x . y) at ε"]);
        assert!(bindings[0].value.ptr_eq(&tm));
    }

    #[test]
    fn pair_needs_pair() {
        assert_eq!(a("x").matches(&p(a("@l"), a("@r"))), None);
    }

    #[test]
    fn bindings_left_to_right() {
        let tm = p(p(a("1"), a("2")), p(a("3"), p(a("4"), a("5"))));
        let pat = p(p(a("@a"), a("2")), p(a("@b"), a("@c")));
        let bindings = tm.matches(&pat).unwrap();
        assert_eq!(
            show(&bindings),
            ["@a ↦ 1 at LL", "@b ↦ 3 at RL", "@c ↦ (4 . 5) at RR"]
        );
    }

    #[test]
    fn failure_anywhere_fails_all() {
        let tm = p(p(a("1"), a("2")), a("3"));
        assert_eq!(tm.matches(&p(p(a("@a"), a("0")), a("@b"))), None);
        assert_eq!(tm.matches(&p(p(a("@a"), a("2")), a("4"))), None);
    }

    #[test]
    fn repeated_wildcard_is_not_checked() {
        let tm = p(a("1"), a("2"));
        let bindings = tm.matches(&p(a("@x"), a("@x"))).unwrap();
        assert_eq!(show(&bindings), ["@x ↦ 1 at L", "@x ↦ 2 at R"]);
    }

    #[test]
    fn wildcard_pattern_vs_equality() {
        // equality treats `@x` as an ordinary atom ...
        assert_eq!(a("@x"), a("@x"));
        assert_ne!(a("@x"), a("@y"));
        // ... whereas matching treats a pattern `@x` as wildcard
        let bindings = a("@y").matches(&a("@x")).unwrap();
        assert_eq!(show(&bindings), ["@x ↦ @y at ε"]);
        let bindings = a("@x").matches(&a("@x")).unwrap();
        assert_eq!(bindings[0].value, a("@x"));
        // a wildcard in the term is not a wildcard for matching
        assert_eq!(a("@x").matches(&a("x")), None);
    }

    #[test]
    fn offset_address() {
        let addr = Address::new().child(Dir::Right);
        let bindings = p(a("1"), a("2")).matches_at(&p(a("@x"), a("2")), addr);
        assert_eq!(show(&bindings.unwrap()), ["@x ↦ 1 at RL"]);
    }
}
