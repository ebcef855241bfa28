use crate::utils::grid::RollGrid;
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2025, day = 4, tags = ["2025", "grid"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = RollGrid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .parse::<RollGrid>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.accessible(&HashSet::new()).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.erode().to_string())
    }
}
