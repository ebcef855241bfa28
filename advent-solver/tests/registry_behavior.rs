//! Registry construction and solver creation tests

use advent_solver::{
    AdventSolver, DynSolver, ParseError, PartSolver, PuzzleParser, RegistrationError,
    RegistryBuilder, SolveError, SolverError,
};

#[derive(AdventSolver)]
#[advent_solver(max_parts = 2)]
struct SumSolver;

impl PuzzleParser for SumSolver {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat("bad int".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for SumSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().max().copied().unwrap_or(0).to_string())
    }
}

/// Zero-copy solver to exercise borrowed shared data through the registry
#[derive(AdventSolver)]
#[advent_solver(max_parts = 1)]
struct EchoSolver;

impl PuzzleParser for EchoSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for EchoSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn creates_and_solves_registered_solver() {
    let registry = RegistryBuilder::new()
        .register::<SumSolver>(2025, 1)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2025, 1, "1\n2\n3").unwrap();
    assert_eq!(solver.year(), 2025);
    assert_eq!(solver.day(), 1);
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "6");
    assert_eq!(solver.solve(2).unwrap().answer, "3");
}

#[test]
fn borrowed_shared_data_flows_through_the_registry() {
    let registry = RegistryBuilder::new()
        .register::<EchoSolver>(2025, 2)
        .unwrap()
        .build();

    let input = String::from("  abcdef  ");
    let mut solver = registry.create_solver(2025, 2, &input).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "6");
}

#[test]
fn duplicate_registration_is_rejected() {
    let result = RegistryBuilder::new()
        .register::<SumSolver>(2025, 1)
        .unwrap()
        .register::<EchoSolver>(2025, 1);

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateSolver(2025, 1))
    ));
}

#[test]
fn unknown_solver_is_not_found() {
    let registry = RegistryBuilder::new().build();
    assert!(matches!(
        registry.create_solver(2025, 3, "").err(),
        Some(SolverError::NotFound(2025, 3))
    ));
}

#[test]
fn parse_failure_surfaces_from_creation() {
    let registry = RegistryBuilder::new()
        .register::<SumSolver>(2025, 1)
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2025, 1, "not a number").err(),
        Some(SolverError::ParseError(_))
    ));
}

#[test]
fn out_of_range_part_is_rejected_by_instances() {
    let registry = RegistryBuilder::new()
        .register::<EchoSolver>(2025, 2)
        .unwrap()
        .build();

    let mut solver = registry.create_solver(2025, 2, "xyz").unwrap();
    assert!(matches!(
        solver.solve(2).err(),
        Some(SolveError::PartOutOfRange(2))
    ));
}

#[test]
fn metadata_iterates_in_year_day_order() {
    let registry = RegistryBuilder::new()
        .register::<SumSolver>(2025, 7)
        .unwrap()
        .register::<EchoSolver>(2024, 3)
        .unwrap()
        .build();

    let info: Vec<(u16, u8, u8)> = registry
        .iter_info()
        .map(|i| (i.year, i.day, i.parts))
        .collect();
    assert_eq!(info, vec![(2024, 3, 1), (2025, 7, 2)]);

    assert_eq!(registry.len(), 2);
    assert!(registry.contains(2025, 7));
    assert!(!registry.contains(2025, 8));
    assert_eq!(registry.get_info(2024, 3).unwrap().parts, 1);
}
