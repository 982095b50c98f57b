//! Pure Connect Four game logic.
//!
//! The engine owns the grid and move counter and answers every state query
//! (turn, winner, game over) by deriving it from those two. It performs no
//! I/O; the console crate drives it through [`ConnectFourModel`].
//!
//! ```
//! use strictly_connect_four::{Board, Player};
//!
//! let mut board = Board::default();
//! for column in [1, 2, 1, 2, 1, 2, 1] {
//!     board.make_move(column).unwrap();
//! }
//! assert_eq!(board.winner(), Some(Player::Red));
//! assert!(board.is_game_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod model;
pub mod rules;
mod types;

pub use board::{Board, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use error::{BoardError, MoveError};
pub use model::ConnectFourModel;
pub use types::{Cell, EMPTY_CELL, GameStatus, Player};
