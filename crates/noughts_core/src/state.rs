//! Complete game state.

use crate::{Action, Grid, Mark, Move, Transition, reduce};
use serde::{Deserialize, Serialize};

/// Whether the game is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A line was completed by this mark; the game is closed.
    Decided(Mark),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::InProgress => None,
            Outcome::Decided(mark) => Some(mark),
        }
    }

    /// True once a winner is decided.
    pub fn is_decided(self) -> bool {
        matches!(self, Outcome::Decided(_))
    }
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The grid.
    pub(crate) grid: Grid,
    /// Mark placed by the next accepted click.
    pub(crate) turn: Mark,
    /// Open or decided.
    pub(crate) outcome: Outcome,
    /// Moves applied so far.
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            turn: Mark::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the mark to be placed next.
    ///
    /// After a win this stays on the winner.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the winner, if decided.
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Status line shown above the board.
    pub fn status(&self) -> String {
        format!("Next player: {}", self.turn)
    }

    /// Winner announcement, once decided.
    pub fn announcement(&self) -> Option<String> {
        self.winner()
            .map(|winner| format!("And the winner is {}!", winner))
    }

    /// Handles a click on the cell at `index`, updating in place.
    pub fn handle_click(&mut self, index: usize) -> Transition {
        let (next, transition) = reduce(std::mem::take(self), Action::Click(index));
        *self = next;
        transition
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
