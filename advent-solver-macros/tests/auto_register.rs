use advent_solver::{DynSolver, ParseError, PartSolver, PuzzleParser, RegistryBuilder, SolveError};
use advent_solver_macros::{AdventSolver, AutoRegisterSolver};

#[derive(AdventSolver, AutoRegisterSolver)]
#[advent_solver(max_parts = 1)]
#[advent(year = 2025, day = 24, tags = ["register-test"])]
struct PluginSolver;

impl PuzzleParser for PluginSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for PluginSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[test]
fn test_plugin_is_collected_and_registered() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert!(registry.contains(2025, 24));
    let mut solver = registry.create_solver(2025, 24, "abcde").unwrap();
    assert_eq!(solver.parts(), 1);
    assert_eq!(solver.solve(1).unwrap().answer, "5");
}

#[test]
fn test_plugin_carries_tags_for_filtering() {
    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"register-test"))
        .unwrap()
        .build();
    assert!(registry.contains(2025, 24));

    let registry = RegistryBuilder::new()
        .register_plugins(|plugin| plugin.tags.contains(&"no-such-tag"))
        .unwrap()
        .build();
    assert!(registry.is_empty());
}
