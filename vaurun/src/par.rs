//! Parallel solving of levels.

use crate::{Error, Level, Opt, Report};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use vau::arc::{Program, Rule, Term};
use vau::Molecule;

type Task = (Level, Program, Term);

fn prepare(level: Level, opt: &Opt) -> Result<Task, Error> {
    let puzzle = level.puzzle();
    puzzle.validate(level)?;
    let mut program = Program::new(puzzle.rules.iter().map(Rule::from).collect());
    program.max_steps = opt.max_steps;
    Ok((level, program, Term::from(&puzzle.start)))
}

fn solve((level, program, start): &Task, echo: bool) -> Result<Report, Error> {
    log::info!("Solve level {}", level);
    let mut steps = program.steps(start.clone());
    let mut lines = Vec::new();
    for step in steps.by_ref() {
        let step = step?;
        if echo {
            let site = &step.site;
            lines.push(format!("{} rule {} at {}: {}", level, step.rule, site.bound_at, site.term));
        }
    }
    let normal = steps.normal()?;
    log::info!("Level {} stopped after {} steps", level, normal.steps);
    let term = Molecule::from(&normal.term);
    Ok(Report::new(*level, lines, term, normal.steps, normal.complete))
}

/// Prepare all levels, then solve them concurrently.
///
/// The reports are returned in the order of the given levels.
pub fn run(levels: &[Level], opt: &Opt) -> Result<Vec<Report>, Error> {
    let tasks = levels.iter().map(|level| prepare(*level, opt));
    let tasks = tasks.collect::<Result<Vec<_>, _>>()?;
    tasks.par_iter().map(|task| solve(task, opt.echo)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn same_as_seq() {
        let opt = Opt::parse_from(["vaurun", "--echo", "-j"]);
        let par = run(&opt.levels(), &opt).unwrap();
        let seq = crate::seq::run(&opt.levels(), &opt).unwrap();
        assert_eq!(par.len(), seq.len());
        for (p, s) in par.iter().zip(seq.iter()) {
            assert_eq!(p.to_string(), s.to_string());
            assert!(p.solved);
        }
    }
}
