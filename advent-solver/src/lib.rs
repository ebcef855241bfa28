//! Advent Puzzle Solver Library
//!
//! A type-safe framework for daily Advent puzzle solvers across multiple
//! years and days. Each puzzle is implemented as a solver with custom input
//! parsing and can produce results for multiple parts.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based interfaces for parsing and per-part solving
//! - Type-erased solver instances with parse/solve timing
//! - A registry system mapping (year, day) to solver factories
//! - Automatic registration of solvers via the plugin system
//!
//! # Quick Example
//!
//! ```
//! use advent_solver::{
//!     AdventSolver, DynSolver, ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError,
//! };
//!
//! // Define a solver: the derive generates the part dispatch
//! #[derive(AdventSolver)]
//! #[advent_solver(max_parts = 1)]
//! struct Day1;
//!
//! impl PuzzleParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.trim()
//!                     .parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! // Register it and solve
//! let registry = RegistryBuilder::new().register::<Day1>(2025, 1).unwrap().build();
//! let mut solver = registry.create_solver(2025, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## PuzzleParser and PartSolver
//!
//! [`PuzzleParser`] defines the shared data type (a generic associated type,
//! so parsed data may borrow from the input) and how to produce it from raw
//! text. Each implemented part is a [`PartSolver<N>`] impl; the
//! [`Solver`] trait dispatching over part numbers is generated by the
//! `AdventSolver` derive macro.
//!
//! ## DynSolver
//!
//! The [`DynSolver`] trait provides type erasure for working with different
//! solver types uniformly. `solve(part)` computes the answer for a part with
//! timing; parse timing is recorded when the instance is created.
//!
//! ## Plugin System
//!
//! Use `#[derive(AutoRegisterSolver)]` to register solvers automatically:
//! ```ignore
//! #[derive(AdventSolver, AutoRegisterSolver)]
//! #[advent_solver(max_parts = 2)]
//! #[advent(year = 2025, day = 1, tags = ["easy"])]
//! struct Day1Solver;
//! ```
//! The registry builder collects submitted plugins with
//! [`RegistryBuilder::register_all_plugins`] or filters them with
//! [`RegistryBuilder::register_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
