//! Console front end: token input, text view, and the play loop.

mod controller;
mod input;
mod view;

pub use controller::{
    ConsoleController, ControllerError, LoopState, NOT_A_NUMBER, QUIT_TOKEN, SessionOutcome,
    is_affirmative,
};
pub use input::TokenReader;
pub use view::{ConsoleView, GameView};
