//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// This trait defines the shared data type and parsing logic for a solver,
/// providing clean separation between parsing and solving concerns.
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, PuzzleParser};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// The shared data structure that holds parsed input.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - types borrowing from the input (`Vec<&'a str>`, `&'a str`) for
    ///   zero-copy parsing when no transformation is needed
    type SharedData<'a>: 'a;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving a specific part of a puzzle.
///
/// The const generic `N` represents the part number (1, 2, etc.), so each
/// implemented part is a separate impl block checked at compile time.
///
/// # Example
///
/// ```
/// use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
///
/// struct Day1;
///
/// impl PuzzleParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Day1 {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i32>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Solve this part of the puzzle.
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that all puzzle solvers must implement.
///
/// Extends `PuzzleParser` to inherit the `SharedData` type and `parse()`.
/// Usually generated from the `PartSolver` impls by the `AdventSolver`
/// derive macro rather than written by hand.
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data
    /// * `part` - The part number (1, 2, etc.)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Extension methods shared by all solvers.
pub trait SolverExt: Solver {
    /// Solve a part after validating it against `1..=PARTS`.
    fn solve_part_checked(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
