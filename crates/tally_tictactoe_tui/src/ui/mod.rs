//! UI rendering using ratatui.

mod board;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tally_tictactoe::Mark;

pub use board::{center_rect, render_board};

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Tally - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let (x, o) = app.scores();
    let config = app.config();
    let scores = Paragraph::new(format!(
        "{}    {}",
        config.score_line(Mark::X, x),
        config.score_line(Mark::O, o)
    ))
    .style(Style::default().add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(scores, chunks[1]);

    render_board(f, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[3]);

    let help = Paragraph::new("1-9 or arrows+Enter: move | R: Reset game | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);

    if let Some(notification) = app.toast() {
        let message = config.message(notification);
        let area = center_rect(chunks[2], toast_width(message, chunks[2].width), 3);
        let toast = Paragraph::new(message.to_string())
            .style(Style::default().fg(Color::Black).bg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(Clear, area);
        f.render_widget(toast, area);
    }
}

/// Room for `message` plus borders and a space each side, capped at `max`.
fn toast_width(message: &str, max: u16) -> u16 {
    let len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    len.saturating_add(4).max(TOAST_MIN_WIDTH).min(max)
}

const TOAST_MIN_WIDTH: u16 = 30;
