//! Sequential solving of levels.

use crate::{Error, Level, Opt, Report};
use vau::rc::{Program, Rule, Term};
use vau::Molecule;

/// Build the program and the start term of a level.
fn prepare(level: Level, opt: &Opt) -> Result<(Program, Term), Error> {
    let puzzle = level.puzzle();
    puzzle.validate(level)?;
    let mut program = Program::new(puzzle.rules.iter().map(Rule::from).collect());
    program.max_steps = opt.max_steps;
    Ok((program, Term::from(&puzzle.start)))
}

fn solve(level: Level, program: &Program, start: Term, echo: bool) -> Result<Report, Error> {
    log::info!("Solve level {}", level);
    let mut steps = program.steps(start);
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
    Ok(Report::new(level, lines, term, normal.steps, normal.complete))
}

pub fn run(levels: &[Level], opt: &Opt) -> Result<Vec<Report>, Error> {
    levels
        .iter()
        .map(|level| {
            let (program, start) = prepare(*level, opt)?;
            solve(*level, &program, start, opt.echo)
        })
        .collect()
}
