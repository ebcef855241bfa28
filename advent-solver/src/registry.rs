//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Factory function type for creating solver instances
///
/// The returned solver borrows from the input it was parsed from.
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Factory entry with its parts count
struct RegistryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a SolverRegistry with a fluent API
///
/// The builder allows method chaining and ensures the registry is immutable
/// after construction. Duplicate registrations are detected here.
///
/// # Example
///
/// ```no_run
/// # use advent_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), RegistryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver type for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate solver for this year-day combination
    pub fn register<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + Sync + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            let solver: Box<dyn DynSolver + '_> = Box::new(instance);
            Ok(solver)
        })
    }

    /// Register a solver factory function with an explicit parts count
    ///
    /// # Arguments
    /// * `year` - The puzzle year
    /// * `day` - The day number (1-25)
    /// * `parts` - Number of parts the produced solvers support
    /// * `factory` - A function that takes input and returns a boxed DynSolver
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.solvers.insert(
            (year, day),
            RegistryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with all plugins registered
    /// * `Err(RegistrationError)` - Duplicate solver found
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<SolverPlugin>() {
            self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
        }
        Ok(self)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter function returns `true`.
    /// This allows selective registration based on tags, year, day, or any
    /// other criteria.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use advent_solver::RegistryBuilder;
    /// // Register only solvers tagged as "grid"
    /// let registry = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// The registry maps (year, day) pairs to factory functions that can create
/// solver instances. Once built, it cannot be modified. Metadata iteration
/// is ordered by (year, day).
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), RegistryEntry>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific year and day
    ///
    /// # Arguments
    /// * `year` - The puzzle year
    /// * `day` - The day number (1-25)
    /// * `input` - The input string for the problem
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Iterate over metadata for all registered solvers, in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.solvers.iter().map(|(&(year, day), entry)| SolverInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Get metadata for a specific solver
    pub fn get_info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.solvers.get(&(year, day)).map(|entry| SolverInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    /// Check if a solver exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.solvers.contains_key(&(year, day))
    }

    /// Get the number of registered solvers
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// This trait provides a type-erased interface for solvers to self-register.
/// Unlike the `Solver` trait it has no associated types, so different solver
/// types can be collected in a single container.
///
/// Any type implementing `Solver` gets a `RegisterableSolver` implementation
/// through a blanket impl, enabling it to be used in the plugin system.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    ///
    /// # Returns
    /// * `Ok(RegistryBuilder)` - Builder with the solver registered
    /// * `Err(RegistrationError)` - Duplicate solver for this year-day combination
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day)
    }
}

/// Plugin information for automatic solver registration
///
/// Holds metadata about a solver plugin: its year, day, a type-erased solver
/// instance, and optional tags for filtering.
///
/// # Example
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2025,
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["2025", "easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "grid", "intervals", "2025")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);
