//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// Input files the selected solvers need but that do not exist
    #[error("Missing {} input file(s)", .0.len())]
    MissingInputs(Vec<PathBuf>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Executor error
    #[error(transparent)]
    Executor(#[from] ExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input file disappeared between the pre-flight check and the run
    #[error("No input for {year}/day{day:02} at {}", .path.display())]
    MissingInput {
        year: u16,
        day: u8,
        path: PathBuf,
    },

    /// Input read failed
    #[error("Input read failed for {year}/day{day:02}: {source}")]
    InputRead {
        year: u16,
        day: u8,
        #[source]
        source: std::io::Error,
    },
}
