//! Application state and input handling.

use crate::config::BoardConfig;
use crate::input::{digit_position, move_cursor};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::{GameState, GameStore, Position, Transition};
use ratatui::layout::Rect;
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    store: GameStore,
    cursor: Position,
    show_numbers: bool,
    /// Set by the store subscription, cleared when drawn.
    dirty: Rc<Cell<bool>>,
    should_quit: bool,
    /// Screen area of the last draw, used for mouse hit tests.
    viewport: Rect,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip_all)]
    pub fn new(board: &BoardConfig) -> Self {
        let mut store = GameStore::new();
        let dirty = Rc::new(Cell::new(true));

        let flag = Rc::clone(&dirty);
        store.subscribe(move |event, _| {
            debug!(?event, "Redraw requested");
            flag.set(true);
        });

        Self {
            store,
            cursor: Position::Center,
            show_numbers: *board.show_numbers(),
            dirty,
            should_quit: false,
            viewport: Rect::default(),
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// Keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their number.
    pub fn show_numbers(&self) -> bool {
        self.show_numbers
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests a redraw.
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Records the screen area the UI was last drawn into.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Clicks a cell.
    ///
    /// Ignored clicks change nothing and request no redraw.
    #[instrument(skip(self))]
    pub fn click(&mut self, pos: Position) -> Transition {
        let transition = self.store.handle_click(pos.to_index());
        if let Transition::Won { winner, .. } = transition {
            info!(%winner, "Winner announced");
        }
        transition
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click(self.cursor);
            }
            code => {
                if let Some(pos) = digit_position(code) {
                    self.set_cursor(pos);
                    self.click(pos);
                } else {
                    self.set_cursor(move_cursor(self.cursor, code));
                }
            }
        }
    }

    /// Handles a mouse event; a left press on a cell clicks it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(pos) = ui::cell_at(self.viewport, mouse.column, mouse.row) {
            debug!(%pos, column = mouse.column, row = mouse.row, "Mouse click on cell");
            self.set_cursor(pos);
            self.click(pos);
        }
    }

    fn set_cursor(&mut self, pos: Position) {
        if pos != self.cursor {
            self.cursor = pos;
            self.mark_dirty();
        }
    }
}
