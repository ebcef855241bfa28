//! Advent 2025 puzzle solutions with automatic registration
//!
//! This crate contains the actual puzzle solutions organized by year. Each
//! solution is a unit-struct solver deriving `AdventSolver` (part dispatch)
//! and `AutoRegisterSolver` (plugin registration with the solver framework).
//! The algorithmic cores shared by the days live in [`utils`].

pub mod solutions;
pub mod utils;
