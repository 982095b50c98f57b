//! Board configuration: defaults, TOML file, and command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_connect_four::{Board, BoardError, DEFAULT_COLUMNS, DEFAULT_ROWS};
use tracing::{debug, info, instrument};

/// Dimensions of the board a session is played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct GameConfig {
    /// Number of rows (at least 4).
    #[serde(default = "default_rows")]
    rows: usize,

    /// Number of columns (at least 4).
    #[serde(default = "default_columns")]
    columns: usize,
}

fn default_rows() -> usize {
    DEFAULT_ROWS
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_rows(), default_columns())
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys take the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(rows = config.rows, columns = config.columns, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces whichever dimensions are given.
    pub fn with_overrides(self, rows: Option<usize>, columns: Option<usize>) -> Self {
        Self {
            rows: rows.unwrap_or(self.rows),
            columns: columns.unwrap_or(self.columns),
        }
    }

    /// Builds an empty board with these dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either dimension is below 4.
    pub fn build_board(&self) -> Result<Board, BoardError> {
        Board::new(self.rows, self.columns)
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
    /// Creates a new configuration error at the caller's location.
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
