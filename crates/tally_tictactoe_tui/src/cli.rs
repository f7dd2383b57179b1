//! Command-line interface for tally.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tally - two-player tic-tac-toe with a running score
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Hot-seat tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config (labels, symbols, messages)
    #[arg(short, long, default_value = "tally.toml", global = true)]
    pub config: PathBuf,

    /// Write logs to this file (the interactive UI logs nowhere otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Feed a move list through the game and print what happens
    Replay {
        /// Moves as `row,col` pairs, each in 0-2 (e.g. `0,0 1,1 0,1`)
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
