//! Actions fed into the reducer and the transitions it reports.
//!
//! A click is the player's intent; the reducer decides whether it becomes a
//! move. Rejected clicks are not errors, they come back as
//! [`Transition::Ignored`] with the reason.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Input to the game state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// User targeted the cell at this index (0-8 is valid).
    Click(usize),
}

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{} -> {}", mark, position)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

/// Why a click left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Ignored {
    /// Index outside 0-8.
    #[display("Index {} is off the grid", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// A winner was already decided.
    #[display("Game already won by {}", _0)]
    GameOver(Mark),
}

/// What a single action did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// Move applied, turn passed to the other mark.
    Played {
        /// The move applied.
        mv: Move,
    },
    /// Move applied and completed a line.
    Won {
        /// The winning move.
        mv: Move,
        /// The winner.
        winner: Mark,
    },
    /// State unchanged.
    Ignored(Ignored),
}

impl Transition {
    /// True if the state changed.
    pub fn is_applied(&self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }

    /// The move applied, if any.
    pub fn applied_move(&self) -> Option<Move> {
        match self {
            Transition::Played { mv } | Transition::Won { mv, .. } => Some(*mv),
            Transition::Ignored(_) => None,
        }
    }
}
