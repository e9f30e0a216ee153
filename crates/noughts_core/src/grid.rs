//! The 3x3 grid and the move applier.

use crate::{Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from raw cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at a position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Positions that are still empty.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Returns a copy with `mark` placed at `pos`.
    ///
    /// Occupancy is not checked here; callers guard before placing.
    pub fn with_mark(mut self, pos: Position, mark: Mark) -> Self {
        self.cells[pos.to_index()] = Cell::Marked(mark);
        self
    }

    /// Formats the grid as text, numbering empty cells 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            if pos.col() == 0 && pos.row() > 0 {
                result.push_str("\n-+-+-\n");
            }
            match self.get(pos) {
                Cell::Empty => result.push_str(&(pos.to_index() + 1).to_string()),
                Cell::Marked(mark) => result.push_str(&mark.to_string()),
            }
            if pos.col() < 2 {
                result.push('|');
            }
        }
        result
    }
}

/// Places `mark` at `pos`, returning the new grid.
///
/// The input grid is left untouched. The target cell should be empty and the
/// game undecided; the reducer enforces both before calling this.
#[instrument(skip(grid))]
pub fn apply_move(grid: &Grid, pos: Position, mark: Mark) -> Grid {
    grid.with_mark(pos, mark)
}
