//! Tic-tac-toe board rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use tally_tictactoe::{Mark, Position, Square, rules};

/// Renders the board with the cursor and any winning line highlighted.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let highlight = rules::winning_line(app.engine().board());
    for row in 0..3 {
        render_row(f, rows[row * 2], app, row, highlight);
        if row < 2 {
            render_separator(f, rows[row * 2 + 1]);
        }
    }
}

fn render_row(f: &mut Frame, area: Rect, app: &App, row: usize, highlight: Option<[Position; 3]>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            let winning = highlight.is_some_and(|line| line.contains(&pos));
            render_square(f, cols[col * 2], app, pos, winning);
        }
        if col < 2 {
            render_vertical_sep(f, cols[col * 2 + 1]);
        }
    }
}

fn render_square(f: &mut Frame, area: Rect, app: &App, pos: Position, winning: bool) {
    let config = app.config();
    let (text, mut style) = match app.engine().board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => {
            let color = match mark {
                Mark::X => Color::Blue,
                Mark::O => Color::Red,
            };
            (
                config.symbol(mark).to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };
    if winning {
        style = style.bg(Color::Green);
    }
    if pos == app.cursor() && app.toast().is_none() {
        style = style.add_modifier(Modifier::REVERSED);
    }
    // Pad vertically so the mark sits in the middle of its 3-line cell.
    let paragraph = Paragraph::new(format!("\n{}", text))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

/// Returns a `width` x `height` rectangle centered in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
