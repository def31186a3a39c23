//! Substitution of wildcards.

use super::{Binding, Term};
use crate::is_wildcard;

impl Term {
    /// Replace every wildcard in the term by the value of
    /// the first binding with the same name.
    ///
    /// Wildcards without binding are kept as they are.
    /// Subterms without wildcards are shared with the original term.
    ///
    /// ~~~
    /// use vau::rc::Term;
    /// let (a, p) = (Term::atom, Term::pair);
    /// let tm = p(a("1"), a("2"));
    /// let bindings = tm.matches(&p(a("@x"), a("@y"))).unwrap();
    ///
    /// let template = p(a("@y"), p(a("@x"), a("@z")));
    /// let expected = p(a("2"), p(a("1"), a("@z")));
    /// assert_eq!(template.substitute(&bindings), expected);
    /// ~~~
    pub fn substitute(&self, bindings: &[Binding]) -> Self {
        match self {
            Self::Atom(name) if is_wildcard(name) => {
                match bindings.iter().find(|b| b.name == *name) {
                    Some(b) => b.value.clone(),
                    None => {
                        trace!("subst: {} is unbound", name);
                        self.clone()
                    }
                }
            }
            Self::Atom(_) => self.clone(),
            Self::Pair(p) => {
                let left = p.left.substitute(bindings);
                let right = p.right.substitute(bindings);
                if left.ptr_eq(&p.left) && right.ptr_eq(&p.right) {
                    self.clone()
                } else {
                    Self::pair(left, right)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::Rc;
    use crate::{Address, Dir};

    fn a(s: &str) -> Term {
        Term::atom(s)
    }

    fn p(l: Term, r: Term) -> Term {
        Term::pair(l, r)
    }

    fn bind(name: &str, value: Term) -> Binding {
        let name = Rc::from(name);
        let address = Address::new();
        Binding { name, address, value }
    }

    #[test]
    fn literals_unchanged() {
        let tm = p(a("x"), p(a("y"), a("z")));
        let bindings = [bind("@x", a("0"))];
        let subst = tm.substitute(&bindings);
        assert_eq!(subst, tm);
        assert!(subst.ptr_eq(&tm));
    }

    #[test]
    fn first_binding_wins() {
        let bindings = [bind("@x", a("1")), bind("@x", a("2"))];
        assert_eq!(a("@x").substitute(&bindings), a("1"));
    }

    #[test]
    fn unbound_wildcard_is_kept() {
        assert_eq!(a("@x").substitute(&[]), a("@x"));
        let bindings = [bind("@y", a("1"))];
        assert_eq!(p(a("@x"), a("@y")).substitute(&bindings), p(a("@x"), a("1")));
    }

    #[test]
    fn captured_value_is_shared() {
        let value = p(a("deep"), a("tree"));
        let bindings = [bind("@v", value.clone())];
        let subst = p(a("@v"), a("@v")).substitute(&bindings);
        let left = subst.get(&[Dir::Left]).unwrap();
        let right = subst.get(&[Dir::Right]).unwrap();
        assert!(left.ptr_eq(&value) && right.ptr_eq(&value));
    }

    #[test]
    fn ground_subterms_are_shared() {
        let ground = p(a("g"), a("h"));
        let template = p(ground.clone(), a("@x"));
        let subst = template.substitute(&[bind("@x", a("1"))]);
        assert!(subst.get(&[Dir::Left]).unwrap().ptr_eq(&ground));
        assert!(!subst.ptr_eq(&template));
    }
}
