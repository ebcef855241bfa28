//! Puzzle solutions organized by year

pub mod year_2025;
