//! Core domain types for Connect Four.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Player {
    /// Red (moves first).
    Red,
    /// Yellow (moves second).
    Yellow,
}

impl Player {
    /// Name shown in prompts and outcome lines (`RED`, `YELLOW`).
    pub fn display_name(self) -> &'static str {
        self.into()
    }

    /// Single-letter code used when rendering the grid.
    pub fn short_code(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        }
    }
}

/// A grid position: `None` when no disc has been dropped there.
pub type Cell = Option<Player>;

/// Filler printed for an empty cell.
pub const EMPTY_CELL: char = '.';

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made.
    InProgress,
    /// A player has four in a row.
    Won(Player),
    /// Board is full and nobody has four in a row.
    Tie,
}

impl GameStatus {
    /// True for `Won` and `Tie`.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
