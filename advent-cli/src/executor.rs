//! Sequential executor for running solvers

use crate::error::ExecutorError;
use crate::inputs::InputStore;
use advent_solver::{DynSolver as _, SolveError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Result from a single solver part execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Sequential executor: runs the selected solvers in (year, day) order,
/// parts in order within each day
pub struct Executor {
    registry: SolverRegistry,
    store: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor over a registry and input store
    pub fn new(
        registry: SolverRegistry,
        store: InputStore,
        year_filter: Option<u16>,
        day_filter: Option<u8>,
        part_filter: Option<u8>,
    ) -> Self {
        Self {
            registry,
            store,
            year_filter,
            day_filter,
            part_filter,
        }
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on part_filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Input files the work items need but the store doesn't have
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<PathBuf> {
        work_items
            .iter()
            .filter(|w| !self.store.contains(w.year, w.day))
            .map(|w| self.store.input_path(w.year, w.day))
            .collect()
    }

    /// Run one work item's parts in order
    ///
    /// A parse failure produces an error result per requested part rather
    /// than aborting the whole run.
    pub fn run(&self, work: &WorkItem) -> Result<Vec<SolverResult>, ExecutorError> {
        let path = self.store.input_path(work.year, work.day);
        if !path.exists() {
            return Err(ExecutorError::MissingInput {
                year: work.year,
                day: work.day,
                path,
            });
        }
        let input = self
            .store
            .read(work.year, work.day)
            .map_err(|source| ExecutorError::InputRead {
                year: work.year,
                day: work.day,
                source,
            })?;

        let mut results = Vec::new();
        match self.registry.create_solver(work.year, work.day, &input) {
            Ok(mut solver) => {
                for part in work.parts.clone() {
                    let result = match solver.solve(part) {
                        Ok(solved) => SolverResult {
                            year: work.year,
                            day: work.day,
                            part,
                            solve_duration: solved.duration(),
                            answer: Ok(solved.answer),
                            parse_duration: Some(solver.parse_duration()),
                        },
                        Err(e) => SolverResult {
                            year: work.year,
                            day: work.day,
                            part,
                            answer: Err(e.into()),
                            parse_duration: Some(solver.parse_duration()),
                            solve_duration: TimeDelta::zero(),
                        },
                    };
                    results.push(result);
                }
            }
            Err(error) => {
                for part in work.parts.clone() {
                    results.push(SolverResult {
                        year: work.year,
                        day: work.day,
                        part,
                        answer: Err(clone_creation_error(&error)),
                        parse_duration: None,
                        solve_duration: TimeDelta::zero(),
                    });
                }
            }
        }
        Ok(results)
    }
}

/// `create_solver` only fails with `NotFound` or `ParseError`, both of which
/// can be reproduced for every requested part; a solve error is stringified.
fn clone_creation_error(error: &SolverError) -> SolverError {
    match error {
        SolverError::NotFound(year, day) => SolverError::NotFound(*year, *day),
        SolverError::ParseError(e) => SolverError::ParseError(e.clone()),
        SolverError::SolveError(e) => {
            SolverError::SolveError(SolveError::SolveFailed(e.to_string().into()))
        }
    }
}
