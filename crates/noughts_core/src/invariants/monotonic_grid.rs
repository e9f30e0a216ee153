//! Monotonic grid invariant: marks appear only where moves were played.

use super::Invariant;
use crate::{Cell, GameState};

/// Invariant: the grid is exactly the replay of the history.
///
/// Every history entry's cell holds that entry's mark, no cell is played
/// twice, and no cell outside the history is marked. Together these mean a
/// marked cell is never altered.
pub struct MonotonicGridInvariant;

impl Invariant<GameState> for MonotonicGridInvariant {
    fn holds(state: &GameState) -> bool {
        let grid = state.grid();
        let history = state.history();

        let mut seen = [false; 9];
        for mv in history {
            let index = mv.position.to_index();
            if seen[index] || grid.get(mv.position) != Cell::Marked(mv.mark) {
                return false;
            }
            seen[index] = true;
        }

        grid.marked_count() == history.len()
    }

    fn description() -> &'static str {
        "Grid marks match the move history one-to-one"
    }
}
