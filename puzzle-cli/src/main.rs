//! Puzzle CLI - Command-line interface for running registered puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod expected;
mod inputs;
mod output;

// Import puzzle-solutions to link the solver plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use itertools::Itertools;
use log::debug;
use output::{OutputFormatter, Tally};
use puzzle_solver::{RegistryBuilder, SolverRegistry};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();
    debug!("{:?}", config);

    // Build registry with tag filtering (only once)
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        let available = executor
            .registry()
            .iter_info()
            .map(|info| format!("{}/{:02} [{}]", info.year, info.day, info.tags.join(", ")))
            .join("\n  ");
        if !available.is_empty() {
            println!("Available:\n  {}", available);
        }
        return Ok(());
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    })?;
    formatter.print_summary(&results);

    let tally = Tally::of(&results);
    if tally.is_success() {
        Ok(())
    } else {
        Err(CliError::Unsuccessful {
            failed: tally.failed,
            mismatched: tally.mismatched,
        })
    }
}

/// Build registry with tag filtering; a solver must carry every requested tag
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
