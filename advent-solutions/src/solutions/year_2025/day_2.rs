use crate::utils::intervals::Span;
use crate::utils::periodic::{num_digits, periodic_numbers};
use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 2)]
#[advent(year = 2025, day = 2, tags = ["2025", "periodic"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Span>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|token| {
                let token = token.trim();
                token
                    .parse::<Span>()
                    .map_err(|e| ParseError::InvalidFormat(format!("range {token:?}: {e}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .map(|span| periodic_numbers(span.start, span.end, 2).sum::<u64>())
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        let mut seen = HashSet::new();
        for span in shared.iter() {
            // one value can be periodic under several repeat counts
            // (111111 repeats a block 2, 3, and 6 times); count it once
            seen.clear();
            for count in 2..=num_digits(span.end) {
                for value in periodic_numbers(span.start, span.end, count) {
                    if seen.insert(value) {
                        total += value;
                    }
                }
            }
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<Span> {
        <Solver as PuzzleParser>::parse(input).unwrap()
    }

    #[test]
    fn parses_comma_separated_ranges() {
        let spans = parse("11-22,95-115");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0], Span { start: 11, end: 22 });
        assert_eq!(spans[1], Span { start: 95, end: 115 });
    }

    #[test]
    fn rejects_malformed_ranges() {
        assert!(<Solver as PuzzleParser>::parse("11-22,9x").is_err());
    }

    #[test]
    fn part_one_sums_double_repeats_per_range() {
        // 11 + 22 + ... + 99 within each range
        let mut shared = parse("10-100");
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "495"
        );
    }

    #[test]
    fn part_one_sums_over_all_ranges() {
        let mut shared = parse("10-100,10-100");
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "990"
        );
    }

    #[test]
    fn part_two_counts_multi_repeat_values_once() {
        // 111111 is periodic for repeat counts 2, 3, and 6 but sums once
        let mut shared = parse("111111-111111");
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "111111"
        );
    }

    #[test]
    fn part_two_adds_higher_repeat_counts() {
        // repeat count 2 finds 11..99, repeat count 3 finds 111..999
        let mut shared = parse("1-1000");
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "5490"
        );
    }

    #[test]
    fn part_two_dedup_is_scoped_per_range() {
        // the same value appearing in two ranges counts in both
        let mut shared = parse("111111-111111,111111-111111");
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "222222"
        );
    }
}
