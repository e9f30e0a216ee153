//! Invariants of the game state.
//!
//! Logical properties that hold for every state the reducer can reach.
//! They are testable on their own and the store checks them after each move.

mod alternating_turn;
mod monotonic_grid;
mod outcome_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_grid::MonotonicGridInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    MonotonicGridInvariant,
    AlternatingTurnInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameState, Mark, Position};

    fn play(clicks: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &index in clicks {
            state.handle_click(index);
        }
        state
    }

    #[test]
    fn test_holds_for_empty_game() {
        assert!(GameInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_holds_for_every_prefix_of_a_won_game() {
        let clicks = [4, 0, 8, 3, 1, 6];
        for n in 0..=clicks.len() {
            let state = play(&clicks[..n]);
            assert!(GameInvariants::check_all(&state).is_ok(), "after {n} clicks");
        }
        assert_eq!(play(&clicks).winner(), Some(Mark::O));
    }

    #[test]
    fn test_detects_corrupted_grid() {
        let mut state = play(&[4]);
        state.grid = state.grid.with_mark(Position::TopLeft, Mark::O);

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert!(!violations.is_empty());
        assert!(
            violations
                .iter()
                .any(|v| v.description == MonotonicGridInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicGridInvariant, AlternatingTurnInvariant);
        let state = play(&[0, 1]);
        assert!(TwoInvariants::check_all(&state).is_ok());
        assert_eq!(state.grid().get(Position::TopCenter), Cell::Marked(Mark::O));
    }
}
