//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Mark, Outcome};

/// Invariant: marks alternate, starting with X.
///
/// While the game is open, `turn` is the mark after the last mover. Once
/// decided, `turn` stays on the last mover, who is the winner.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.first().is_some_and(|mv| mv.mark != Mark::X) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        match (state.outcome(), history.last()) {
            (Outcome::InProgress, None) => state.turn() == Mark::X,
            (Outcome::InProgress, Some(last)) => state.turn() == last.mark.opponent(),
            (Outcome::Decided(winner), Some(last)) => {
                winner == last.mark && state.turn() == winner
            }
            (Outcome::Decided(_), None) => false,
        }
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}
