//! The game state machine as a pure function.

use crate::rules::evaluate_winner;
use crate::{Action, GameState, Ignored, Move, Outcome, Position, Transition, apply_move};
use tracing::{debug, instrument};

/// Applies `action` to `state`, returning the next state and what happened.
///
/// Clicks that cannot become a move (off the grid, occupied cell, game
/// already decided) return the state unchanged with
/// [`Transition::Ignored`].
#[instrument(skip(state), fields(turn = %state.turn, moves = state.history.len()))]
pub fn reduce(state: GameState, action: Action) -> (GameState, Transition) {
    match action {
        Action::Click(index) => click(state, index),
    }
}

fn click(mut state: GameState, index: usize) -> (GameState, Transition) {
    let position = match target(&state, index) {
        Ok(position) => position,
        Err(reason) => {
            debug!(%reason, "Click ignored");
            return (state, Transition::Ignored(reason));
        }
    };

    let mv = Move::new(state.turn, position);
    state.grid = apply_move(&state.grid, position, mv.mark);
    state.history.push(mv);

    if let Some(winner) = evaluate_winner(&state.grid) {
        debug!(%mv, %winner, "Winning move");
        state.outcome = Outcome::Decided(winner);
        return (state, Transition::Won { mv, winner });
    }

    debug!(%mv, "Move applied");
    state.turn = state.turn.opponent();
    (state, Transition::Played { mv })
}

/// Resolves the clicked cell, or the reason the click must be ignored.
fn target(state: &GameState, index: usize) -> Result<Position, Ignored> {
    let position = Position::from_index(index).ok_or(Ignored::OutOfRange(index))?;
    if let Outcome::Decided(winner) = state.outcome {
        return Err(Ignored::GameOver(winner));
    }
    if !state.grid.is_empty(position) {
        return Err(Ignored::Occupied(position));
    }
    Ok(position)
}
