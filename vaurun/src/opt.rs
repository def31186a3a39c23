use crate::Level;
use clap::Parser;

#[derive(Clone, Debug, Parser)]
/// Solve rewriting puzzles on binary-tree terms
pub struct Opt {
    /// Maximal number of rewrite steps per level
    ///
    /// A level whose rules still apply after this many steps is unsolved.
    #[arg(long, value_name = "N", default_value_t = vau::rc::DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Print every rewrite step
    ///
    /// For every step, print the index of the applied rule,
    /// the address of the rewritten subterm, and the resulting term.
    #[arg(long)]
    pub echo: bool,

    /// Solve levels concurrently (number of threads chosen automatically if argument omitted)
    ///
    /// If this option is given with a number n, then
    /// maximally n levels are solved concurrently.
    /// If this option is given without an extra argument, then
    /// the number of concurrently solved levels is
    /// determined automatically from the number of CPUs.
    #[arg(long, short = 'j', value_name = "N")]
    pub jobs: Option<Option<usize>>,

    /// Levels to solve (all levels if none given)
    #[arg(value_enum, value_name = "LEVEL")]
    pub levels: Vec<Level>,
}

impl Opt {
    /// Return the levels to solve.
    pub fn levels(&self) -> Vec<Level> {
        if self.levels.is_empty() {
            Level::ALL.to_vec()
        } else {
            self.levels.clone()
        }
    }
}
