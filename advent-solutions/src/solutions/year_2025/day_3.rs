use crate::utils::digits::largest_subsequence;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2025, day = 3, tags = ["2025", "digits"])]
pub struct Solver;

impl PuzzleParser for Solver {
    // digit lines are used as-is, so the parsed data borrows from the input
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input
            .trim()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no digit lines".to_string()));
        }
        if let Some(line) = lines
            .iter()
            .find(|line| !line.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(ParseError::InvalidFormat(format!(
                "non-digit line {line:?}"
            )));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_largest(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_largest(shared, 12)
    }
}

fn sum_largest(lines: &[&str], target_len: usize) -> Result<String, SolveError> {
    lines
        .iter()
        .map(|line| largest_subsequence(line, target_len))
        .try_fold(0u64, |acc, value| value.map(|v| acc + v))
        .map(|total| total.to_string())
        .map_err(|e| SolveError::SolveFailed(Box::new(e)))
}
