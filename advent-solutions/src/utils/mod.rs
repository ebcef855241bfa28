//! Reusable algorithm components shared by the daily solvers

pub mod digits;
pub mod grid;
pub mod intervals;
pub mod periodic;
