//! Tic-tac-toe board rendering and cell geometry.

use noughts_core::{Cell, GameState, Mark, Position, winning_line};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 11;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Board width: three cells and two separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Board height: three cells and two separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Centers the board inside `area`.
pub fn board_area(area: Rect) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(BOARD_WIDTH)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(BOARD_HEIGHT)])
        .flex(Flex::Center)
        .areas(column);
    board
}

/// Screen rectangle of every cell, in index order.
pub fn cell_rects(board: Rect) -> [Rect; 9] {
    Position::ALL.map(|pos| {
        Rect::new(
            board.x + pos.col() as u16 * (CELL_WIDTH + 1),
            board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board)
    })
}

/// Renders the board centered in `area`.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    state: &GameState,
    cursor: Position,
    show_numbers: bool,
) {
    let highlight = winning_line(state.grid());
    let separator = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for row in 0..3 {
        for text_row in 0..CELL_HEIGHT {
            let mut spans = Vec::with_capacity(5);
            for col in 0..3 {
                let Some(pos) = Position::at(row, col) else {
                    continue;
                };
                let (symbol, style) = cell_look(state, pos, cursor, highlight, show_numbers);
                let text = if text_row == CELL_HEIGHT / 2 { symbol } else { String::new() };
                spans.push(Span::styled(
                    format!("{:^width$}", text, width = CELL_WIDTH as usize),
                    style,
                ));
                if col < 2 {
                    spans.push(Span::styled("│", separator));
                }
            }
            lines.push(Line::from(spans));
        }
        if row < 2 {
            let bar = "─".repeat(CELL_WIDTH as usize);
            lines.push(Line::styled(format!("{bar}┼{bar}┼{bar}"), separator));
        }
    }

    frame.render_widget(Paragraph::new(lines), board_area(area));
}

fn cell_look(
    state: &GameState,
    pos: Position,
    cursor: Position,
    highlight: Option<[Position; 3]>,
    show_numbers: bool,
) -> (String, Style) {
    let (symbol, base) = match state.grid().get(pos) {
        Cell::Empty if show_numbers => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::new(), Style::default()),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlight.is_some_and(|line| line.contains(&pos)) {
        base.bg(Color::Green).fg(Color::Black)
    } else if pos == cursor {
        base.bg(Color::White).fg(Color::Black)
    } else {
        base
    };

    (symbol, style)
}
