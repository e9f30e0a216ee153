//! Tic-tac-toe game logic for noughts.
//!
//! Two pure operations and one state machine:
//!
//! - [`evaluate_winner`] finds the mark holding a full row, column or diagonal
//! - [`apply_move`] returns a grid with one more mark on it
//! - [`reduce`] takes a [`GameState`] and an [`Action`] to the next state
//!
//! [`GameStore`] wraps the state machine for front ends that need change
//! notifications.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameStore, Mark};
//!
//! let mut store = GameStore::new();
//! for index in [0, 3, 1, 4, 2] {
//!     store.handle_click(index);
//! }
//! assert_eq!(store.state().winner(), Some(Mark::X));
//! assert_eq!(store.state().announcement().as_deref(), Some("And the winner is X!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod grid;
pub mod invariants;
mod mark;
mod position;
mod reducer;
pub mod rules;
mod state;
mod store;

pub use action::{Action, Ignored, Move, Transition};
pub use grid::{Grid, apply_move};
pub use mark::{Cell, Mark};
pub use position::{Position, PositionError};
pub use reducer::reduce;
pub use rules::{evaluate_winner, winning_line};
pub use state::{GameState, Outcome};
pub use store::{GameEvent, GameStore, SubscriptionId};
