//! Four-in-a-row detection.

use crate::{Board, Player};
use std::ops::Range;
use tracing::instrument;

/// Number of same-player discs in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// A line orientation scanned for winning windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Fixed row, increasing column.
    Horizontal,
    /// Fixed column, increasing row.
    Vertical,
    /// Falling to the right: `(row - i, col + i)`.
    DiagonalDown,
    /// Rising to the right: `(row + i, col + i)`.
    DiagonalUp,
}

impl Direction {
    /// Scan order used by [`check_winner`].
    pub const ORDER: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Row and column step between consecutive cells of a window.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (-1, 1),
            Direction::DiagonalUp => (1, 1),
        }
    }

    /// Admissible start rows and columns, so the whole window stays on the board.
    fn starts(self, rows: usize, columns: usize) -> (Range<usize>, Range<usize>) {
        let span = WIN_LENGTH - 1;
        let all_rows = 0..rows;
        let all_columns = 0..columns;
        let low_rows = 0..rows.saturating_sub(span);
        let narrow_columns = 0..columns.saturating_sub(span);
        match self {
            Direction::Horizontal => (all_rows, narrow_columns),
            Direction::Vertical => (low_rows, all_columns),
            Direction::DiagonalDown => (span..rows, narrow_columns),
            Direction::DiagonalUp => (low_rows, narrow_columns),
        }
    }
}

/// Checks if there is a winner on the board.
///
/// Directions are evaluated in [`Direction::ORDER`]; the owner of the first
/// complete window found is returned. Empty cells never match, not even
/// each other.
#[instrument(skip(board), fields(rows = board.rows(), columns = board.columns()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    Direction::ORDER
        .into_iter()
        .find_map(|direction| winner_in_direction(board, direction))
}

/// Returns the owner of the first winning window in one direction.
pub fn winner_in_direction(board: &Board, direction: Direction) -> Option<Player> {
    let (row_starts, column_starts) = direction.starts(board.rows(), board.columns());
    for row in row_starts {
        for col in column_starts.clone() {
            if let Some(player) = window_owner(board, row, col, direction) {
                return Some(player);
            }
        }
    }
    None
}

/// The player filling all four cells of the window anchored at `(row, col)`.
fn window_owner(board: &Board, row: usize, col: usize, direction: Direction) -> Option<Player> {
    let anchor = board.get(row, col).flatten()?;
    let (row_step, col_step) = direction.step();
    let matches = (1..WIN_LENGTH as isize).all(|i| {
        let r = row as isize + row_step * i;
        let c = col as isize + col_step * i;
        usize::try_from(r)
            .ok()
            .zip(usize::try_from(c).ok())
            .and_then(|(r, c)| board.get(r, c))
            .flatten()
            == Some(anchor)
    });
    matches.then_some(anchor)
}
