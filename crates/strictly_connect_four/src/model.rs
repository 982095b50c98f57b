//! The model seam the console loop drives.

use crate::{Board, Cell, MoveError, Player};

/// Operations a play loop needs from a Connect Four model.
///
/// [`Board`] is the real engine; tests substitute scripted models to drive
/// the loop through fixed sequences of states.
pub trait ConnectFourModel {
    /// Clears every cell.
    fn initialize_board(&mut self);

    /// Drops the current player's disc into a 1-indexed column.
    fn make_move(&mut self, column: i64) -> Result<Player, MoveError>;

    /// Player to move, or `None` once the game is over.
    fn turn(&self) -> Option<Player>;

    /// True when the board is full or someone has won.
    fn is_game_over(&self) -> bool;

    /// Winner, if any.
    fn winner(&self) -> Option<Player>;

    /// Empties the board and resets the move counter.
    fn reset_board(&mut self);

    /// Independent copy of the grid, indexed `[row][col]`.
    fn board_state(&self) -> Vec<Vec<Cell>>;

    /// Text snapshot of the board.
    fn render(&self) -> String;
}

impl ConnectFourModel for Board {
    fn initialize_board(&mut self) {
        Board::initialize_board(self);
    }

    fn make_move(&mut self, column: i64) -> Result<Player, MoveError> {
        Board::make_move(self, column)
    }

    fn turn(&self) -> Option<Player> {
        Board::turn(self)
    }

    fn is_game_over(&self) -> bool {
        Board::is_game_over(self)
    }

    fn winner(&self) -> Option<Player> {
        Board::winner(self)
    }

    fn reset_board(&mut self) {
        Board::reset_board(self);
    }

    fn board_state(&self) -> Vec<Vec<Cell>> {
        Board::board_state(self)
    }

    fn render(&self) -> String {
        Board::render(self)
    }
}
