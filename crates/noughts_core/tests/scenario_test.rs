//! End-to-end game scenarios through the public API.

use noughts_core::{
    Action, Cell, GameState, GameStore, Grid, Ignored, Mark, Outcome, Position, Transition,
    apply_move, evaluate_winner, reduce,
};

fn grid_with(marks: &[(usize, Mark)]) -> Grid {
    marks.iter().fold(Grid::new(), |grid, &(index, mark)| {
        apply_move(&grid, Position::from_index(index).unwrap(), mark)
    })
}

#[test]
fn test_apply_move_leaves_other_cells_alone() {
    let grid = grid_with(&[(0, Mark::X), (4, Mark::O), (7, Mark::X)]);
    for pos in grid.empty_positions() {
        for mark in [Mark::X, Mark::O] {
            let next = apply_move(&grid, pos, mark);
            assert_eq!(next.get(pos), Cell::Marked(mark));
            for other in Position::ALL.into_iter().filter(|p| *p != pos) {
                assert_eq!(next.get(other), grid.get(other));
            }
        }
    }
}

#[test]
fn test_evaluate_winner_reference_grids() {
    assert_eq!(evaluate_winner(&Grid::new()), None);
    assert_eq!(
        evaluate_winner(&grid_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)])),
        Some(Mark::X)
    );
    assert_eq!(
        evaluate_winner(&grid_with(&[(0, Mark::X), (3, Mark::X), (6, Mark::X)])),
        Some(Mark::X)
    );
    assert_eq!(
        evaluate_winner(&grid_with(&[(0, Mark::X), (4, Mark::X), (8, Mark::X)])),
        Some(Mark::X)
    );
    assert_eq!(
        evaluate_winner(&grid_with(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)])),
        None
    );
}

#[test]
fn test_turn_alternation() {
    let mut state = GameState::new();
    assert_eq!(state.turn(), Mark::X);
    state.handle_click(0);
    assert_eq!(state.turn(), Mark::O);
    state.handle_click(3);
    assert_eq!(state.turn(), Mark::X);
}

#[test]
fn test_x_wins_top_row() {
    let mut store = GameStore::new();
    let mut last = None;
    for index in [0, 3, 1, 4, 2] {
        last = Some(store.handle_click(index));
    }

    let state = store.state();
    assert!(matches!(last, Some(Transition::Won { winner: Mark::X, .. })));
    assert_eq!(evaluate_winner(state.grid()), Some(Mark::X));
    assert_eq!(state.outcome(), Outcome::Decided(Mark::X));
    assert_eq!(state.announcement().as_deref(), Some("And the winner is X!"));
    assert_eq!(state.status(), "Next player: X");
}

#[test]
fn test_click_after_win_does_not_touch_grid() {
    let mut store = GameStore::new();
    for index in [0, 3, 1, 4, 2] {
        store.handle_click(index);
    }
    let before = store.state().clone();

    for index in [5, 6, 7, 8] {
        assert_eq!(
            store.handle_click(index),
            Transition::Ignored(Ignored::GameOver(Mark::X))
        );
    }
    assert_eq!(store.state(), &before);
}

#[test]
fn test_reduce_is_pure_over_values() {
    let start = GameState::new();
    let (a, _) = reduce(start.clone(), Action::Click(4));
    let (b, _) = reduce(start.clone(), Action::Click(4));
    assert_eq!(a, b);
    assert_eq!(start, GameState::new());
}
