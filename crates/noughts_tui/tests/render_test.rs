//! Rendering and input tests against ratatui's test backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::{Mark, Outcome, Position};
use noughts_tui::ui::{self, CELL_HEIGHT, CELL_WIDTH};
use noughts_tui::{App, BoardConfig};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    terminal
        .draw(|frame| {
            app.set_viewport(frame.area());
            ui::draw(frame, app);
        })
        .expect("draw");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Middle of a cell on an 80x30 screen, where its symbol is drawn.
fn point_in(pos: Position) -> (u16, u16) {
    let viewport = Rect::new(0, 0, WIDTH, HEIGHT);
    let (left, top) = (0..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
        .find(|&(x, y)| ui::cell_at(viewport, x, y) == Some(pos))
        .expect("cell on screen");
    (left + CELL_WIDTH / 2, top + CELL_HEIGHT / 2)
}

#[test]
fn test_initial_screen_shows_next_player() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    let mut app = App::new(&BoardConfig::default());

    let screen = draw(&mut terminal, &mut app);
    assert!(screen.contains("Next player: X"));
    assert!(!screen.contains("winner"));
}

#[test]
fn test_winner_announced_after_top_row() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    let mut app = App::new(&BoardConfig::default());

    // Keys 1-9 are cells 0-8: X 0,1,2 / O 3,4
    for c in ['1', '4', '2', '5', '3'] {
        press(&mut app, c);
    }

    let screen = draw(&mut terminal, &mut app);
    assert_eq!(app.state().outcome(), Outcome::Decided(Mark::X));
    assert!(screen.contains("And the winner is X!"));
    assert!(screen.contains("Next player: X"));
}

#[test]
fn test_mouse_click_places_mark() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    let mut app = App::new(&BoardConfig::default());
    draw(&mut terminal, &mut app);

    let (x, y) = point_in(Position::BottomLeft);
    app.handle_mouse(left_click(x, y));

    assert_eq!(app.state().grid().get(Position::BottomLeft).mark(), Some(Mark::X));
    assert_eq!(app.cursor(), Position::BottomLeft);
    assert!(draw(&mut terminal, &mut app).contains("Next player: O"));
}

#[test]
fn test_mouse_click_after_win_changes_nothing() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    let mut app = App::new(&BoardConfig::default());
    draw(&mut terminal, &mut app);
    for c in ['1', '4', '2', '5', '3'] {
        press(&mut app, c);
    }
    let before = app.state().clone();

    let (x, y) = point_in(Position::BottomRight);
    app.handle_mouse(left_click(x, y));

    assert_eq!(app.state(), &before);
}

#[test]
fn test_numbers_hidden_when_disabled() {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");

    let mut shown = App::new(&BoardConfig::new(true));
    let mut hidden = App::new(&BoardConfig::new(false));

    let (x, y) = point_in(Position::Center);
    let cell_symbol = |terminal: &Terminal<TestBackend>| {
        terminal.backend().buffer()[(x, y)].symbol().to_string()
    };

    draw(&mut terminal, &mut shown);
    assert_eq!(cell_symbol(&terminal), "5");
    draw(&mut terminal, &mut hidden);
    assert_eq!(cell_symbol(&terminal), " ");
}
