//! Outcome invariant: the recorded outcome matches the grid.

use super::Invariant;
use crate::rules::evaluate_winner;
use crate::{GameState, Outcome};

/// Invariant: `outcome` is decided exactly when the grid has a winning line.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        match (state.outcome(), evaluate_winner(state.grid())) {
            (Outcome::InProgress, None) => true,
            (Outcome::Decided(recorded), Some(found)) => recorded == found,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with the winning line on the grid"
    }
}
