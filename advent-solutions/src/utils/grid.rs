//! Paper-roll grid with neighbor-count erosion.

use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

/// Grid coordinates as `(row, col)`
pub type Cell = (usize, usize);

/// Error type for parsing a character grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridParseError {
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular grid of roll positions; `@` marks an occupied cell.
///
/// The grid itself is never mutated. Erosion tracks logically deleted cells
/// in a separate removed set, so each pass counts neighbors against the
/// current occupancy rather than the original one.
#[derive(Debug, Clone)]
pub struct RollGrid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl FromStr for RollGrid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut height = 0;
        let mut width = 0;
        let mut cells = Vec::new();
        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let row_width = line.chars().count();
            if height == 0 {
                width = row_width;
            } else if row_width != width {
                return Err(GridParseError::RaggedRow {
                    row: height,
                    expected: width,
                    found: row_width,
                });
            }
            cells.extend(line.chars().map(|c| c == '@'));
            height += 1;
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }
}

impl RollGrid {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn is_occupied(&self, (row, col): Cell) -> bool {
        self.cells[row * self.width + col]
    }

    /// Occupied, non-removed cells among the 8 surrounding ones;
    /// out-of-bounds neighbors never count.
    fn live_neighbors(&self, (row, col): Cell, removed: &HashSet<Cell>) -> usize {
        let mut count = 0;
        for row_delta in -1..=1isize {
            for col_delta in -1..=1isize {
                if row_delta == 0 && col_delta == 0 {
                    continue;
                }
                let Some(r) = row.checked_add_signed(row_delta) else {
                    continue;
                };
                let Some(c) = col.checked_add_signed(col_delta) else {
                    continue;
                };
                if r < self.height
                    && c < self.width
                    && self.is_occupied((r, c))
                    && !removed.contains(&(r, c))
                {
                    count += 1;
                }
            }
        }
        count
    }

    /// Cells removable right now: occupied, not yet removed, and with fewer
    /// than 4 live neighbors.
    pub fn accessible(&self, removed: &HashSet<Cell>) -> HashSet<Cell> {
        let mut cells = HashSet::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = (row, col);
                if self.is_occupied(cell)
                    && !removed.contains(&cell)
                    && self.live_neighbors(cell, removed) < 4
                {
                    cells.insert(cell);
                }
            }
        }
        cells
    }

    /// Remove accessible cells until a pass removes nothing, and return the
    /// total number removed.
    ///
    /// Terminates: the removed set only grows and is bounded by the number
    /// of occupied cells.
    pub fn erode(&self) -> usize {
        let mut removed = HashSet::new();
        loop {
            let accessible = self.accessible(&removed);
            if accessible.is_empty() {
                return removed.len();
            }
            removed.extend(accessible);
        }
    }
}
