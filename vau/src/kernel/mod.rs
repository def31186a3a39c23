mod matching;
mod program;
mod rewrite;
mod subst;
mod term;

pub use program::{Normal, Program, Step, Steps, DEFAULT_MAX_STEPS};
pub use rewrite::{Rewrite, Site};
pub use term::{Pair, Term};

use super::Rc;

/// Rewrite rule on shared terms.
pub type Rule = crate::Rule<Term>;

/// Subterm captured by a wildcard.
pub type Binding = crate::Binding<Rc<str>, Term>;
