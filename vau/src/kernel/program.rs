//! Rewriting until no rule applies.

use super::{Rule, Site, Term};
use crate::Error;
use alloc::vec::Vec;

/// Maximal number of steps that a program performs by default.
pub const DEFAULT_MAX_STEPS: usize = 10_000;

/// Sequence of rewrite rules that are applied repeatedly.
///
/// ~~~
/// # use vau::Error;
/// use vau::rc::{Program, Rule, Term};
/// let (a, p) = (Term::atom, Term::pair);
///
/// // move the elements of the first list onto the second list
/// let rules = Vec::from([
///     Rule::new(
///         p(a("+"), p(p(a("@h"), a("@t")), a("@b"))),
///         p(a("+"), p(a("@t"), p(a("@h"), a("@b")))),
///     ),
///     Rule::new(p(a("+"), p(a("nil"), a("@b"))), a("@b")),
/// ]);
/// let program = Program::new(rules);
///
/// let ones = |n| Term::list(core::iter::repeat(a("1")).take(n).collect::<Vec<_>>());
/// let normal = program.normalize(p(a("+"), p(ones(2), ones(3))))?;
/// assert_eq!(normal.term, ones(5));
/// assert_eq!(normal.steps, 3);
/// assert!(normal.complete);
/// # Ok::<_, Error>(())
/// ~~~
#[derive(Clone, Debug)]
pub struct Program {
    /// rules, in decreasing priority
    pub rules: Vec<Rule>,
    /// maximal number of steps to perform
    pub max_steps: usize,
}

/// Rewriting of a term by one rule of a program.
#[derive(Clone, Debug)]
pub struct Step {
    /// index of the applied rule
    pub rule: usize,
    pub site: Site,
}

/// Final term obtained by running a program.
#[derive(Clone, Debug)]
pub struct Normal {
    pub term: Term,
    /// number of performed steps
    pub steps: usize,
    /// true if no rule applies to the term,
    /// false if the maximal number of steps stopped the program
    pub complete: bool,
}

impl Default for Program {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl From<Vec<Rule>> for Program {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl Program {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            ..Default::default()
        }
    }

    /// Rewrite the term with the first rule that applies anywhere in it.
    ///
    /// Return `None` if no rule applies.
    pub fn step(&self, term: &Term) -> Result<Option<Step>, Error> {
        for (rule, r) in self.rules.iter().enumerate() {
            match term.apply_anywhere(r) {
                Ok(site) => {
                    debug!("step: rule {} at {}", rule, site.bound_at);
                    return Ok(Some(Step { rule, site }));
                }
                Err(Error::NoApplicableSite) => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(None)
    }

    /// Lazily perform steps on a term.
    pub fn steps(&self, term: Term) -> Steps<'_> {
        Steps {
            program: self,
            term,
            taken: 0,
            stuck: false,
        }
    }

    /// Perform steps on a term until no rule applies or
    /// the maximal number of steps is reached.
    pub fn normalize(&self, term: Term) -> Result<Normal, Error> {
        self.steps(term).normal()
    }
}

/// Iterator over the steps performed by a program, see [`Program::steps`].
pub struct Steps<'a> {
    program: &'a Program,
    term: Term,
    taken: usize,
    /// true if no rule applied to `term`
    stuck: bool,
}

impl<'a> Steps<'a> {
    /// Return the term after the steps performed so far.
    pub fn term(&self) -> &Term {
        &self.term
    }

    /// Perform all remaining steps and return the final term.
    pub fn normal(mut self) -> Result<Normal, Error> {
        for step in self.by_ref() {
            step?;
        }
        // if we stopped because of the step limit, find out whether
        // the program would have stopped anyway
        let complete = self.stuck || self.program.step(&self.term)?.is_none();
        Ok(Normal {
            term: self.term,
            steps: self.taken,
            complete,
        })
    }
}

impl<'a> Iterator for Steps<'a> {
    type Item = Result<Step, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stuck || self.taken >= self.program.max_steps {
            return None;
        }
        match self.program.step(&self.term) {
            Ok(Some(step)) => {
                trace!("step {}: {}", self.taken, step.site.term);
                self.term = step.site.term.clone();
                self.taken += 1;
                Some(Ok(step))
            }
            Ok(None) => {
                self.stuck = true;
                None
            }
            Err(e) => Some(Err(e)),
        }
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

    /// Rules that reverse a list `(rev l . nil)`.
    fn reverse() -> Program {
        Program::new(Vec::from([
            Rule::new(
                p(a("rev"), p(p(a("@h"), a("@t")), a("@acc"))),
                p(a("rev"), p(a("@t"), p(a("@h"), a("@acc")))),
            ),
            Rule::new(p(a("rev"), p(a("nil"), a("@acc"))), a("@acc")),
        ]))
    }

    fn abc() -> Term {
        Term::list([a("a"), a("b"), a("c")])
    }

    #[test]
    fn normalize() {
        let normal = reverse().normalize(Term::list([a("rev"), abc()])).unwrap();
        assert_eq!(normal.term.to_string(), "(c b a)");
        assert_eq!(normal.steps, 4);
        assert!(normal.complete);
    }

    #[test]
    fn steps_report_rules() {
        let program = reverse();
        let steps: Vec<_> = program.steps(Term::list([a("rev"), abc()])).collect();
        let rules: Vec<_> = steps.iter().map(|s| s.as_ref().unwrap().rule).collect();
        assert_eq!(rules, [0, 0, 0, 1]);
        let last = steps.last().unwrap().as_ref().unwrap();
        assert_eq!(last.site.bound_at.to_string(), "ε");
    }

    #[test]
    fn rule_priority() {
        // both rules apply, the first one wins
        let program = Program::new(Vec::from([
            Rule::new(a("x"), a("first")),
            Rule::new(a("x"), a("second")),
        ]));
        let step = program.step(&a("x")).unwrap().unwrap();
        assert_eq!(step.rule, 0);
        assert_eq!(step.site.term, a("first"));
    }

    #[test]
    fn priority_beats_position() {
        // the second rule applies at the root, but the first rule is tried first
        let program = Program::new(Vec::from([
            Rule::new(a("y"), a("z")),
            Rule::new(p(a("x"), a("@r")), a("@r")),
        ]));
        let step = program.step(&p(a("x"), a("y"))).unwrap().unwrap();
        assert_eq!(step.rule, 0);
        assert_eq!(step.site.term, p(a("x"), a("z")));
    }

    #[test]
    fn no_rules() {
        let normal = Program::default().normalize(abc()).unwrap();
        assert_eq!(normal.term, abc());
        assert_eq!(normal.steps, 0);
        assert!(normal.complete);
    }

    #[test]
    fn step_limit() {
        // this rule grows the term forever
        let mut program = Program::new(Vec::from([Rule::new(a("x"), p(a("s"), a("x")))]));
        program.max_steps = 3;
        let normal = program.normalize(a("x")).unwrap();
        assert_eq!(normal.term.to_string(), "(s s s . x)");
        assert_eq!(normal.steps, 3);
        assert!(!normal.complete);
    }

    #[test]
    fn step_limit_at_normal_form() {
        let mut program = reverse();
        program.max_steps = 4;
        let normal = program.normalize(Term::list([a("rev"), abc()])).unwrap();
        assert_eq!(normal.steps, 4);
        assert!(normal.complete);
    }

    #[test]
    fn steps_track_term() {
        let program = reverse();
        let mut steps = program.steps(Term::list([a("rev"), abc()]));
        steps.next().unwrap().unwrap();
        assert_eq!(steps.term().to_string(), "(rev (b c) a)");
    }
}
