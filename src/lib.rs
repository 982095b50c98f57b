//! Console Connect Four.
//!
//! A line-oriented text protocol over the [`strictly_connect_four`] engine.
//!
//! # Architecture
//!
//! - **Engine**: [`Board`] (grid, gravity drops, win/tie detection), reached
//!   through the [`ConnectFourModel`] trait
//! - **Loop**: [`ConsoleController`] reads tokens and sequences moves,
//!   errors, game over, replay, and quit
//! - **View**: [`ConsoleView`] turns each protocol message into a text line
//! - **Config**: [`GameConfig`] board dimensions from defaults, TOML, or flags
//!
//! # Example
//!
//! ```
//! use connect_four_console::{Board, ConsoleController, ConsoleView, SessionOutcome};
//!
//! let mut board = Board::default();
//! let mut controller = ConsoleController::new("4 0".as_bytes(), ConsoleView::new(Vec::new()));
//! let outcome = controller.play_game(Some(&mut board)).unwrap();
//! assert_eq!(outcome, SessionOutcome::Quit);
//! assert_eq!(board.move_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod game_config;

// Crate-level exports - Console loop
pub use console::{
    ConsoleController, ConsoleView, ControllerError, GameView, LoopState, NOT_A_NUMBER,
    QUIT_TOKEN, SessionOutcome, TokenReader, is_affirmative,
};

// Crate-level exports - Configuration
pub use game_config::{ConfigError, GameConfig};

// Crate-level exports - Engine types
pub use strictly_connect_four::{
    Board, BoardError, Cell, ConnectFourModel, GameStatus, MoveError, Player,
};
