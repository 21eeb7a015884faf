//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::application::{evaluate, AllocationEngine};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::infrastructure::load_roster;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Run {
            file,
            seed,
            evaluate,
        }) => _run(file, *seed, *evaluate),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument]
fn _run(file: &Path, seed: Option<u64>, with_metrics: bool) -> CliResult<()> {
    let roster = load_roster(file)?;
    debug!(students = roster.students.len(), seed = ?seed, "running allocation");

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut ledger = roster.ledger;
    let mut engine = AllocationEngine::new(rng);
    let assignment = engine.run(&roster.students, &roster.store, &mut ledger);

    for (id, courses) in assignment.iter() {
        let row = courses.iter().map(|crn| crn.to_string()).join(" ");
        if row.is_empty() {
            output::info(&id);
        } else {
            output::info(&format!("{id} {row}"));
        }
    }

    if with_metrics {
        let report = evaluate(&assignment, &roster.store, &ledger);
        output::header("allocation metrics");
        for line in report.to_string().lines() {
            output::detail(line);
        }
    }

    Ok(())
}
