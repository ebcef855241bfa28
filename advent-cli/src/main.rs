//! Advent CLI - command-line interface for running the puzzle solvers

mod cli;
mod error;
mod executor;
mod inputs;
mod output;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use error::CliError;
use executor::Executor;
use inputs::InputStore;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    // Build registry with tag filtering (only once)
    let registry = build_registry(&args.tags)?;

    let store = InputStore::new(args.input_dir.clone(), args.test);
    let executor = Executor::new(registry, store, args.year, args.day, args.part);

    // Collect work items
    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Every input must exist before anything runs
    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        eprintln!("Missing {} input file(s):", missing.len());
        for path in &missing {
            eprintln!("  - {}", path.display());
        }
        return Err(CliError::MissingInputs(missing));
    }

    let formatter = OutputFormatter::new(args.quiet);
    let mut results = Vec::new();
    for work in &work_items {
        for result in executor.run(work)? {
            formatter.print_result(&result);
            results.push(result);
        }
    }

    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<advent_solver::SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
