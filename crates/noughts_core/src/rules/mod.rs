//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](crate::Grid), kept apart from state so the
//! reducer and the invariants can share them.

pub mod win;

pub use win::{LINES, evaluate_winner, winning_line};
