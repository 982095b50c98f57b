//! Full-board detection.

use crate::Board;
use tracing::instrument;

/// Checks if every cell of the board holds a disc.
#[instrument(skip(board), fields(move_count = board.move_count()))]
pub fn is_full(board: &Board) -> bool {
    board.move_count() >= board.rows() * board.columns()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;

    fn is_tie(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    /// Column-major pattern in which no player ever lines up four.
    const TIE_COLUMNS: [usize; 42] = [
        1, 2, 1, 2, 1, 2, 2, 1, 2, 1, 2, 1, //
        3, 4, 3, 4, 3, 4, 4, 3, 4, 3, 4, 3, //
        5, 6, 5, 6, 5, 6, 6, 5, 6, 5, 6, 5, //
        7, 7, 7, 7, 7, 7,
    ];

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::default();
        assert!(!is_full(&board));
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::default();
        board.make_move(4).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        let mut board = Board::default();
        for column in TIE_COLUMNS {
            board.make_move(column as i64).unwrap();
        }
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let board = Board::from_picture(&["RYRY", "YRYR", "RYRY", "RRRR"]);
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
