//! Game store: owns the state and notifies subscribers of changes.
//!
//! Front ends dispatch actions here and subscribe to redraw. Notification is
//! synchronous and happens before `dispatch` returns.

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{Action, GameState, Mark, Move, Transition, reduce};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Notification sent to subscribers after the state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was applied and the game continues.
    MovePlayed {
        /// The move applied.
        mv: Move,
    },
    /// A move was applied and completed a line.
    GameWon {
        /// The winning move.
        mv: Move,
        /// The winner.
        winner: Mark,
    },
}

impl GameEvent {
    fn from_transition(transition: &Transition) -> Option<Self> {
        match *transition {
            Transition::Played { mv } => Some(GameEvent::MovePlayed { mv }),
            Transition::Won { mv, winner } => Some(GameEvent::GameWon { mv, winner }),
            Transition::Ignored(_) => None,
        }
    }
}

/// Handle returned by [`GameStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("subscription#{}", _0)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&GameEvent, &GameState)>;

/// Holds the current [`GameState`] and the subscribers watching it.
pub struct GameStore {
    state: GameState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl GameStore {
    /// Creates a store holding a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_state(GameState::new())
    }

    /// Creates a store holding `state`.
    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers a callback invoked after every state change.
    ///
    /// Callbacks run in subscription order.
    #[instrument(skip_all)]
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent, &GameState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        debug!(%id, subscribers = self.subscribers.len(), "Subscribed");
        id
    }

    /// Removes a subscription. Returns false if it was not registered.
    #[instrument(skip(self))]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Applies an action and notifies subscribers if the state changed.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let (next, transition) = reduce(std::mem::take(&mut self.state), action);
        self.state = next;

        let Some(event) = GameEvent::from_transition(&transition) else {
            return transition;
        };

        if let Err(violations) = GameInvariants::check_all(&self.state) {
            for violation in &violations {
                error!(%violation, "State invariant broken");
            }
        }

        if let GameEvent::GameWon { winner, .. } = event {
            info!(%winner, moves = self.state.history().len(), "Game decided");
        }

        for (_, subscriber) in &mut self.subscribers {
            subscriber(&event, &self.state);
        }

        transition
    }

    /// Handles a click on the cell at `index`.
    pub fn handle_click(&mut self, index: usize) -> Transition {
        self.dispatch(Action::Click(index))
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ignored, Position};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder(store: &mut GameStore) -> (SubscriptionId, Rc<RefCell<Vec<GameEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let id = store.subscribe(move |event, _| sink.borrow_mut().push(*event));
        (id, events)
    }

    #[test]
    fn test_subscriber_sees_each_move_in_order() {
        let mut store = GameStore::new();
        let (_, events) = recorder(&mut store);

        store.handle_click(0);
        store.handle_click(4);

        assert_eq!(
            *events.borrow(),
            vec![
                GameEvent::MovePlayed { mv: Move::new(Mark::X, Position::TopLeft) },
                GameEvent::MovePlayed { mv: Move::new(Mark::O, Position::Center) },
            ]
        );
    }

    #[test]
    fn test_ignored_click_does_not_notify() {
        let mut store = GameStore::new();
        store.handle_click(4);
        let (_, events) = recorder(&mut store);

        let t = store.handle_click(4);
        assert_eq!(t, Transition::Ignored(Ignored::Occupied(Position::Center)));
        let t = store.handle_click(42);
        assert_eq!(t, Transition::Ignored(Ignored::OutOfRange(42)));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_subscriber_receives_new_state() {
        let mut store = GameStore::new();
        let turns = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&turns);
        store.subscribe(move |_, state| sink.borrow_mut().push(state.turn()));

        store.handle_click(0);
        store.handle_click(1);

        assert_eq!(*turns.borrow(), vec![Mark::O, Mark::X]);
    }

    #[test]
    fn test_win_event_and_gate() {
        let mut store = GameStore::new();
        let (_, events) = recorder(&mut store);
        for index in [0, 3, 1, 4, 2] {
            store.handle_click(index);
        }

        assert_eq!(
            events.borrow().last(),
            Some(&GameEvent::GameWon {
                mv: Move::new(Mark::X, Position::TopRight),
                winner: Mark::X,
            })
        );

        let t = store.handle_click(8);
        assert_eq!(t, Transition::Ignored(Ignored::GameOver(Mark::X)));
        assert_eq!(events.borrow().len(), 5);
    }

    #[test]
    fn test_unsubscribe() {
        let mut store = GameStore::new();
        let (first, first_events) = recorder(&mut store);
        let (_, second_events) = recorder(&mut store);

        assert!(store.unsubscribe(first));
        assert!(!store.unsubscribe(first));

        store.handle_click(4);
        assert!(first_events.borrow().is_empty());
        assert_eq!(second_events.borrow().len(), 1);
    }
}
