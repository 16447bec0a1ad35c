//! Command-line timetable solver.
//!
//! Loads a catalog (JSON file or the built-in university catalog), validates
//! it, runs the backtracking solver, and prints the timetable.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use u_timetable::csp::{SolverConfig, SolverStatus, TimetableSolver};
use u_timetable::models::Catalog;
use u_timetable::validation::validate_catalog;
use u_timetable::{report, Result, TimetableError};

#[derive(Debug, Parser)]
#[command(name = "u-timetable", version, about = "Solve a university timetable")]
struct Cli {
    /// Catalog JSON file. Uses the built-in catalog when omitted.
    #[arg(short, long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Give up after this many milliseconds.
    #[arg(short, long, value_name = "MS", default_value_t = 60_000)]
    time_limit_ms: i64,

    /// Only validate the catalog.
    #[arg(long)]
    validate_only: bool,

    /// Print the catalog as JSON and exit.
    #[arg(long)]
    dump_catalog: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!(event = "failed", error = %err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::university(),
    };

    if cli.dump_catalog {
        println!("{}", catalog.to_json_string()?);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.validate_only {
        validate_catalog(&catalog).map_err(TimetableError::InvalidInput)?;
        println!(
            "Catalog is valid: {} candidate slots.",
            catalog.candidate_count()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let solver =
        TimetableSolver::new().with_config(SolverConfig::new().with_time_limit_ms(cli.time_limit_ms));
    let solution = solver.solve_checked(&catalog)?;
    match (solution.status, &solution.assignment) {
        (SolverStatus::Feasible, Some(assignment)) => {
            print!("{}", report::render(&catalog, assignment));
            Ok(ExitCode::SUCCESS)
        }
        (SolverStatus::Timeout, _) => {
            println!("No schedule found within {} ms.", cli.time_limit_ms);
            Ok(ExitCode::from(2))
        }
        (SolverStatus::Cancelled, _) => {
            println!("Search cancelled.");
            Ok(ExitCode::from(2))
        }
        _ => {
            println!("No valid schedule found.");
            Ok(ExitCode::SUCCESS)
        }
    }
}
