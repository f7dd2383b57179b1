//! Tally - hot-seat tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod sinks;
mod ui;

use anyhow::{Context, Result};
use app::{Action, App};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play);
    let headless = matches!(command, Command::Replay { .. });
    initialize_tracing(cli.log_file.as_deref(), headless)?;

    let config = GameConfig::load_or_default(&cli.config)?;

    match command {
        Command::Play => run_tui(config),
        Command::Replay { moves } => {
            for line in replay::run(&config, &moves)? {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// Run the interactive terminal UI
#[instrument(skip_all)]
fn run_tui(config: GameConfig) -> Result<()> {
    info!("Starting terminal UI");
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, App::new(config));
    ratatui::restore();
    info!("Terminal UI closed");
    result
}

fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key.code) == Action::Quit {
                return Ok(());
            }
        }
    }
}

/// Logs go to `log_file` when given. Without one, only headless runs log
/// (to stderr); the full-screen UI would be overwritten by log lines.
fn initialize_tracing(log_file: Option<&Path>, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tally_tictactoe=debug"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None if headless => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }

    info!("Tracing initialized");
    Ok(())
}
