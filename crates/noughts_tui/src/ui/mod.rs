//! UI rendering using ratatui.

mod board;

pub use board::{
    BOARD_HEIGHT, BOARD_WIDTH, CELL_HEIGHT, CELL_WIDTH, board_area, cell_rects, render_board,
};

use crate::app::App;
use noughts_core::Position;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "Arrows/hjkl: move | Enter/Space/click: place | 1-9: place | Q: quit";

/// Splits the screen into title, status, board, info and help rows.
fn layout(area: Rect) -> [Rect; 5] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(area)
}

/// Draws the main UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, status_area, board_row, info_area, help_area] = layout(frame.area());
    let state = app.state();

    let title = Paragraph::new("noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, title_area);

    let status = Paragraph::new(state.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, status_area);

    render_board(frame, board_row, state, app.cursor(), app.show_numbers());

    let info = Paragraph::new(state.announcement().unwrap_or_default())
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(info, info_area);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, help_area);
}

/// Finds the cell under a terminal coordinate, given the full screen area.
pub fn cell_at(viewport: Rect, column: u16, row: u16) -> Option<Position> {
    let [_, _, board_row, _, _] = layout(viewport);
    let point = ratatui::layout::Position::new(column, row);
    cell_rects(board_area(board_row))
        .iter()
        .position(|rect| rect.contains(point))
        .and_then(Position::from_index)
}
