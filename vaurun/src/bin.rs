//! Solve rewriting puzzles on binary-tree terms.

use clap::Parser;
use vaurun::{conclude, par, seq, Error, Opt};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env("LOG").init();

    let opt = Opt::parse();
    let levels = opt.levels();

    // if a precise number of parallel jobs has been given
    if let Some(Some(jobs)) = opt.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()?;
    }

    let reports = if opt.jobs.is_some() {
        par::run(&levels, &opt)?
    } else {
        seq::run(&levels, &opt)?
    };
    conclude(&reports)
}
