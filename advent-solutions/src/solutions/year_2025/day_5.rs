use crate::utils::intervals::{MergedSpans, Span};
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};

// The second part of this puzzle has no defined behavior, so only part 1
// is registered; requests for part 2 are rejected by the framework.
#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 1)]
#[advent(year = 2025, day = 5, tags = ["2025", "intervals"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    spans: Vec<Span>,
    ids: Vec<u64>,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lines = input.trim().lines().map(str::trim);

        let spans = lines
            .by_ref()
            .take_while(|line| !line.is_empty())
            .map(|line| {
                line.parse::<Span>()
                    .map_err(|e| ParseError::InvalidFormat(format!("range {line:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if spans.is_empty() {
            return Err(ParseError::MissingData(
                "no ranges before the separator".to_string(),
            ));
        }

        let ids = lines
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.parse::<u64>()
                    .map_err(|e| ParseError::InvalidFormat(format!("id {line:?}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { spans, ids })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let merged = MergedSpans::merge(&shared.spans);
        let count = shared.ids.iter().filter(|&&id| merged.contains(id)).count();
        Ok(count.to_string())
    }
}
