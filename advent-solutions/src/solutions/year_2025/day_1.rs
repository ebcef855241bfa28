use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use anyhow::anyhow;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2025, day = 1, tags = ["2025", "rotation"])]
pub struct Solver;

/// The dial starts at 50 on a 0-99 circular track.
const DIAL_START: i64 = 50;

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(line_idx, line)| {
                parse_rotation(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_zero_landings(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_zero_passes(shared).to_string())
    }
}

/// A rotation line is `<L|R><steps>`; left turns become negative offsets.
fn parse_rotation(line: &str) -> anyhow::Result<i64> {
    let (direction, steps) = line
        .split_at_checked(1)
        .ok_or_else(|| anyhow!("empty rotation"))?;
    let steps: u32 = steps.parse().map_err(|e| anyhow!("rotation amount: {e}"))?;
    match direction {
        "R" => Ok(i64::from(steps)),
        "L" => Ok(-i64::from(steps)),
        _ => Err(anyhow!("first character must be 'L' or 'R'")),
    }
}

/// Applies each full offset and counts stops on the zero mark.
fn count_zero_landings(offsets: &[i64]) -> u64 {
    let (_, count) = offsets
        .iter()
        .fold((DIAL_START, 0u64), |(position, count), &offset| {
            let position = position + offset;
            let count = count + u64::from(position.rem_euclid(100) == 0);
            (position, count)
        });
    count
}

/// Counts every time the dial reaches or crosses the zero mark: whole laps
/// first, then the remainder of the move.
fn count_zero_passes(offsets: &[i64]) -> u64 {
    let (_, count) = offsets
        .iter()
        .fold((DIAL_START, 0u64), |(position, count), &offset| {
            let mut count = count + (offset / 100).unsigned_abs();
            let next = position + offset % 100;
            // >= 100 and == 0 catch clockwise arrivals, < 0 counter-clockwise
            // ones; a move stopping exactly on zero satisfies a single branch
            if next >= 100 || (next < 0 && position != 0) || next == 0 {
                count += 1;
            }
            (next.rem_euclid(100), count)
        });
    count
}
