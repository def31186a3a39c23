//! Built-in puzzles.

use crate::Error;
use core::fmt::{self, Display};
use vau::{Molecule, Rule};

/// A puzzle is solved by rewriting its start term with its rules
/// until no rule applies, obtaining its goal.
pub struct Puzzle {
    pub start: Molecule,
    /// rules, in decreasing priority
    pub rules: Vec<Rule<Molecule>>,
    pub goal: Molecule,
}

/// Name of a built-in puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Level {
    /// Unary addition
    Add,
    /// List reversal
    Reverse,
    /// Swapping of marked pairs
    Swap,
}

fn a(s: &str) -> Molecule {
    Molecule::atom(s)
}

fn p(l: Molecule, r: Molecule) -> Molecule {
    Molecule::pair(l, r)
}

fn ones(n: usize) -> Molecule {
    Molecule::list(std::iter::repeat(a("1")).take(n).collect::<Vec<_>>())
}

/// Rules that move the elements of the list `l1` in `(op l1 . l2)`
/// one by one onto the list `l2`, and finally yield `l2`.
fn transfer(op: &str) -> Vec<Rule<Molecule>> {
    let step = Rule::new(
        p(a(op), p(p(a("@h"), a("@t")), a("@b"))),
        p(a(op), p(a("@t"), p(a("@h"), a("@b")))),
    );
    let done = Rule::new(p(a(op), p(a("nil"), a("@b"))), a("@b"));
    Vec::from([step, done])
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Add, Self::Reverse, Self::Swap];

    pub fn puzzle(self) -> Puzzle {
        match self {
            Self::Add => Puzzle {
                start: p(a("+"), p(ones(3), ones(3))),
                rules: transfer("+"),
                goal: ones(6),
            },
            Self::Reverse => {
                let abcd = ["a", "b", "c", "d"].map(a);
                let dcba = ["d", "c", "b", "a"].map(a);
                Puzzle {
                    start: p(a("rev"), p(Molecule::list(abcd), a("nil"))),
                    rules: transfer("rev"),
                    goal: Molecule::list(dcba),
                }
            }
            Self::Swap => {
                let swap = |l, r| p(a("swap"), p(l, r));
                let rule = Rule::new(swap(a("@x"), a("@y")), p(a("@y"), a("@x")));
                Puzzle {
                    start: swap(swap(a("a"), a("b")), swap(a("c"), a("d"))),
                    rules: Vec::from([rule]),
                    goal: p(p(a("d"), a("c")), p(a("b"), a("a"))),
                }
            }
        }
    }
}

impl Puzzle {
    /// Fail if any rule of the puzzle uses its wildcards inconsistently.
    pub fn validate(&self, level: Level) -> Result<(), Error> {
        match self.rules.iter().find(|rule| !rule.is_valid()) {
            Some(rule) => Err(Error::InvalidRule(level, rule.to_string())),
            None => Ok(()),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Reverse => "reverse",
            Self::Swap => "swap",
        };
        name.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vau::Tree;

    #[test]
    fn puzzles_are_valid() {
        for level in Level::ALL {
            let puzzle = level.puzzle();
            assert!(puzzle.validate(level).is_ok());
            assert!(!puzzle.start.contains_wildcard());
            assert!(!puzzle.goal.contains_wildcard());
        }
    }

    #[test]
    fn invalid_rule() {
        let mut puzzle = Level::Swap.puzzle();
        puzzle.rules.push(Rule::new(a("@x"), a("@y")));
        match puzzle.validate(Level::Swap) {
            Err(Error::InvalidRule(Level::Swap, rule)) => assert_eq!(rule, "@x ⟶ @y"),
            _ => panic!("rule should be invalid"),
        }
    }

    #[test]
    fn display() {
        assert_eq!(Level::Add.puzzle().start.to_string(), "(+ (1 1 1) 1 1 1)");
        assert_eq!(Level::Reverse.to_string(), "reverse");
    }
}
