//! Board engine: grid storage, gravity drops, and turn parity.

use crate::error::{BoardError, MoveError};
use crate::rules::{self, WIN_LENGTH};
use crate::types::{Cell, EMPTY_CELL, GameStatus, Player};
use std::fmt;
use tracing::{debug, instrument};

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 6;
/// Default number of columns.
pub const DEFAULT_COLUMNS: usize = 7;

/// Connect Four board.
///
/// Row 0 is the bottom of the physical board. Turn, winner, and game-over
/// are always derived from the grid and the move counter, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Cells in row-major order, bottom row first.
    cells: Vec<Cell>,
    move_count: usize,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if either dimension is below 4,
    /// or if `rows * columns` does not fit in a `usize`.
    #[instrument]
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows < WIN_LENGTH || columns < WIN_LENGTH {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }
        let capacity = rows
            .checked_mul(columns)
            .ok_or(BoardError::InvalidDimensions { rows, columns })?;
        Ok(Self::empty(rows, columns, capacity))
    }

    fn empty(rows: usize, columns: usize, capacity: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![None; capacity],
            move_count: 0,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Discs placed since construction or the last reset.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Gets the cell at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + col).copied()
    }

    /// Clears every cell. The move counter is left alone; see [`Board::reset_board`].
    #[instrument(skip(self))]
    pub fn initialize_board(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Drops the current player's disc into a 1-indexed column.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once a player has won or the board is full.
    /// - [`MoveError::ColumnOutOfBounds`] unless `1 <= column <= columns`.
    /// - [`MoveError::ColumnFull`] if the top cell of the column is taken.
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn make_move(&mut self, column: i64) -> Result<Player, MoveError> {
        let col = usize::try_from(column)
            .ok()
            .filter(|c| (1..=self.columns).contains(c))
            .map(|c| c - 1)
            .ok_or(MoveError::ColumnOutOfBounds { column })?;

        let row = (0..self.rows)
            .find(|&row| self.cells[row * self.columns + col].is_none())
            .ok_or(MoveError::ColumnFull { column })?;

        let player = self.turn().ok_or(MoveError::GameOver)?;
        self.cells[row * self.columns + col] = Some(player);
        self.move_count += 1;

        debug!(?player, row, col, "Disc dropped");
        Ok(player)
    }

    /// Player to move, or `None` once the game is over.
    pub fn turn(&self) -> Option<Player> {
        if self.is_game_over() {
            return None;
        }
        if self.move_count % 2 == 0 {
            Some(Player::Red)
        } else {
            Some(Player::Yellow)
        }
    }

    /// True when the board is full or someone has four in a row.
    pub fn is_game_over(&self) -> bool {
        rules::is_full(self) || self.winner().is_some()
    }

    /// Owner of the first four-in-a-row found, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Game status, with a winner taking precedence over a full board.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if rules::is_full(self) => GameStatus::Tie,
            None => GameStatus::InProgress,
        }
    }

    /// Empties the board and resets the move counter. Dimensions are kept.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn reset_board(&mut self) {
        self.initialize_board();
        self.move_count = 0;
        debug!("Board reset");
    }

    /// Returns an independent copy of the grid, indexed `[row][col]`.
    pub fn board_state(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.columns)
            .map(<[Cell]>::to_vec)
            .collect()
    }

    /// Text snapshot, top row first: `"<row>: "` then space-separated cells.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Builds a board from a picture, top row first, using `R`, `Y`, and `.`.
    ///
    /// The move counter is set to the number of discs. Gravity is not checked.
    #[cfg(test)]
    pub(crate) fn from_picture(picture: &[&str]) -> Self {
        let rows = picture.len();
        let columns = picture[0].len();
        let mut board = Self::new(rows, columns).unwrap();
        for (offset, line) in picture.iter().enumerate() {
            let row = rows - 1 - offset;
            for (col, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    'R' => Some(Player::Red),
                    'Y' => Some(Player::Yellow),
                    _ => None,
                };
                if cell.is_some() {
                    board.move_count += 1;
                }
                board.cells[row * columns + col] = cell;
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_ROWS * DEFAULT_COLUMNS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(self.columns).enumerate().rev() {
            let symbols: Vec<String> = cells
                .iter()
                .map(|&cell| cell.map_or(EMPTY_CELL, Player::short_code).to_string())
                .collect();
            writeln!(f, "{}: {}", row, symbols.join(" "))?;
        }
        Ok(())
    }
}
