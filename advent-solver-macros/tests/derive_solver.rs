use advent_solver::{ParseError, PartSolver, PuzzleParser, SolveError, Solver};
use advent_solver_macros::AdventSolver;

#[derive(AdventSolver)]
#[advent_solver(max_parts = 2)]
struct TestSolver;

impl PuzzleParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<TestSolver as Solver>::PARTS, 2);
}

#[test]
fn test_generated_dispatch_reaches_each_part() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();

    let part1 = TestSolver::solve_part(&mut shared, 1).unwrap();
    assert_eq!(part1, "6");

    let part2 = TestSolver::solve_part(&mut shared, 2).unwrap();
    assert_eq!(part2, "6");
}

#[test]
fn test_part_outside_max_parts_is_not_implemented() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();

    let result = TestSolver::solve_part(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));

    let result = TestSolver::solve_part(&mut shared, 0);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(0))));
}
