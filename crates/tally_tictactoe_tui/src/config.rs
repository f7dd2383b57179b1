//! Player labels and round messages, loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tally_tictactoe::{Mark, Notification};
use tracing::{debug, info, instrument};

/// Display text for the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown next to the first player's score.
    #[serde(default = "default_player_one_label")]
    player_one_label: String,

    /// Name shown next to the second player's score.
    #[serde(default = "default_player_two_label")]
    player_two_label: String,

    /// Symbol drawn for the first player's mark.
    #[serde(default = "default_player_one_symbol")]
    player_one_symbol: String,

    /// Symbol drawn for the second player's mark.
    #[serde(default = "default_player_two_symbol")]
    player_two_symbol: String,

    /// Notification when the first player wins a round.
    #[serde(default = "default_player_one_wins")]
    player_one_wins: String,

    /// Notification when the second player wins a round.
    #[serde(default = "default_player_two_wins")]
    player_two_wins: String,

    /// Notification when a round is drawn.
    #[serde(default = "default_draw_game")]
    draw_game: String,
}

fn default_player_one_label() -> String {
    "Player A".to_string()
}

fn default_player_two_label() -> String {
    "Player B".to_string()
}

fn default_player_one_symbol() -> String {
    "X".to_string()
}

fn default_player_two_symbol() -> String {
    "O".to_string()
}

fn default_player_one_wins() -> String {
    "Player A wins!".to_string()
}

fn default_player_two_wins() -> String {
    "Player B wins!".to_string()
}

fn default_draw_game() -> String {
    "Draw!".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one_label: default_player_one_label(),
            player_two_label: default_player_two_label(),
            player_one_symbol: default_player_one_symbol(),
            player_two_symbol: default_player_two_symbol(),
            player_one_wins: default_player_one_wins(),
            player_two_wins: default_player_two_wins(),
            draw_game: default_draw_game(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one_label,
            player_two = %config.player_two_label,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Player name for `mark`.
    pub fn label(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_one_label(),
            Mark::O => self.player_two_label(),
        }
    }

    /// Symbol drawn for `mark`.
    pub fn symbol(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_one_symbol(),
            Mark::O => self.player_two_symbol(),
        }
    }

    /// Message shown for an end-of-round notification.
    pub fn message(&self, notification: Notification) -> &str {
        match notification {
            Notification::Win(Mark::X) => self.player_one_wins(),
            Notification::Win(Mark::O) => self.player_two_wins(),
            Notification::Draw => self.draw_game(),
        }
    }

    /// Score line such as `Player A: 3`.
    pub fn score_line(&self, mark: Mark, score: u32) -> String {
        format!("{}: {}", self.label(mark), score)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
