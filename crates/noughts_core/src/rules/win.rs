//! Win detection.

use crate::{Grid, Mark, Position};
use tracing::instrument;

/// Every line that wins: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line (in [`LINES`] order) held entirely by one mark.
#[instrument(skip(grid))]
pub fn winning_line(grid: &Grid) -> Option<[Position; 3]> {
    LINES.into_iter().find(|[a, b, c]| {
        let cell = grid.get(*a);
        !cell.is_empty() && cell == grid.get(*b) && cell == grid.get(*c)
    })
}

/// Returns the mark holding three in a row, if any.
///
/// A full grid with no line yields `None`, same as a game in progress.
#[instrument(skip(grid))]
pub fn evaluate_winner(grid: &Grid) -> Option<Mark> {
    winning_line(grid).and_then(|[a, _, _]| grid.get(a).mark())
}
