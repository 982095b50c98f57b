//! Error types for the board engine.

use derive_more::{Display, Error};

/// Board construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Either dimension is below the four needed for a winning line.
    #[display("Board size must be at least 4x4")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        columns: usize,
    },
}

/// Rejected move. The board is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Column number outside `1..=columns`.
    #[display("Column out of bounds")]
    ColumnOutOfBounds {
        /// The 1-indexed column that was requested.
        column: i64,
    },

    /// A player has already won or the board is full.
    #[display("Game is already over")]
    GameOver,

    /// The top cell of the column is already occupied.
    #[display("Column is full")]
    ColumnFull {
        /// The 1-indexed column that was requested.
        column: i64,
    },
}
