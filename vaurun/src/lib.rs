//! Solve rewriting puzzles on binary-tree terms.

mod error;
mod level;
mod opt;
pub mod par;
pub mod seq;

pub use error::Error;
pub use level::{Level, Puzzle};
pub use opt::Opt;

use core::fmt::{self, Display};
use vau::Molecule;

/// Outcome of running the rules of a level.
pub struct Report {
    pub level: Level,
    /// one line per performed step, if requested
    pub echo: Vec<String>,
    /// term after the last step
    pub term: Molecule,
    pub steps: usize,
    /// true if no rule applies to the final term
    pub complete: bool,
    /// true if the final term is the level's goal and no rule applies to it
    pub solved: bool,
}

impl Report {
    pub fn new(level: Level, echo: Vec<String>, term: Molecule, steps: usize, complete: bool) -> Self {
        let solved = complete && term == level.puzzle().goal;
        Self {
            level,
            echo,
            term,
            steps,
            complete,
            solved,
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.echo.iter().try_for_each(|line| writeln!(f, "{}", line))?;
        let status = if self.solved {
            "solved"
        } else if self.complete {
            "stuck"
        } else {
            "out of steps"
        };
        write!(f, "{}: {} after {} steps: {}", self.level, status, self.steps, self.term)
    }
}

/// Print the reports and fail if any level was not solved.
pub fn conclude(reports: &[Report]) -> Result<(), Error> {
    reports.iter().for_each(|report| println!("{}", report));
    let unsolved: Vec<_> = reports.iter().filter(|r| !r.solved).map(|r| r.level).collect();
    if unsolved.is_empty() {
        Ok(())
    } else {
        Err(Error::Unsolved(unsolved))
    }
}
