//! The play loop: tokens in, model calls, view messages out.

use super::input::TokenReader;
use super::view::GameView;
use derive_more::{Display, Error};
use std::io::{self, BufRead};
use strictly_connect_four::ConnectFourModel;
use tracing::{debug, error, info, instrument, warn};

/// Token that ends the session immediately.
pub const QUIT_TOKEN: i64 = 0;

/// Message shown when a token is not an integer.
pub const NOT_A_NUMBER: &str = "Is not a number!";

/// Where the play loop is in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Waiting for a column (or the quit token).
    AwaitingMove,
    /// The last move ended the game; waiting for a replay answer.
    GameOverPromptingReplay,
    /// The session is over.
    Terminated(SessionOutcome),
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player entered the quit token.
    Quit,
    /// A game ended and the player declined another.
    Finished,
}

/// Error that ends a session.
#[derive(Debug, Display, Error)]
pub enum ControllerError {
    /// No model was supplied.
    #[display("Model cannot be absent")]
    MissingModel,

    /// Writing to the view or reading input failed.
    #[display("I/O error: {}", source)]
    Io {
        /// Underlying failure.
        source: io::Error,
    },

    /// Input ended while a move was expected.
    #[display("Input closed while awaiting a move")]
    InputClosed,
}

impl From<io::Error> for ControllerError {
    fn from(source: io::Error) -> Self {
        Self::Io { source }
    }
}

/// Drives games on a [`ConnectFourModel`], reading moves from `R` and
/// reporting through `V`.
#[derive(Debug)]
pub struct ConsoleController<R, V> {
    input: TokenReader<R>,
    view: V,
}

impl<R: BufRead, V: GameView> ConsoleController<R, V> {
    /// Creates a controller over an input stream and a view.
    pub fn new(input: R, view: V) -> Self {
        Self {
            input: TokenReader::new(input),
            view,
        }
    }

    /// Borrows the view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Consumes the controller, returning the view.
    pub fn into_view(self) -> V {
        self.view
    }

    /// Plays until the player quits, or a game ends and no replay is wanted.
    ///
    /// Malformed tokens and rejected moves are reported and re-prompted.
    /// After a game-ending move the board is shown with the outcome and the
    /// player is asked to play again; yes resets the model and play resumes.
    ///
    /// # Errors
    ///
    /// - [`ControllerError::MissingModel`] if `model` is `None`, before any output.
    /// - [`ControllerError::Io`] if the view cannot be written to.
    /// - [`ControllerError::InputClosed`] if input runs out while awaiting a move.
    #[instrument(skip(self, model))]
    pub fn play_game(
        &mut self,
        model: Option<&mut dyn ConnectFourModel>,
    ) -> Result<SessionOutcome, ControllerError> {
        let model = model.ok_or(ControllerError::MissingModel)?;
        info!("Session started");

        let mut state = LoopState::AwaitingMove;
        loop {
            state = match state {
                LoopState::AwaitingMove => self.await_move(model),
                LoopState::GameOverPromptingReplay => self.prompt_replay(model),
                LoopState::Terminated(outcome) => {
                    info!(?outcome, "Session ended");
                    return Ok(outcome);
                }
            }
            .inspect_err(|e| error!(error = %e, "Session aborted"))?;
            debug!(?state, "Transition");
        }
    }

    /// One pass of the move prompt.
    fn await_move(
        &mut self,
        model: &mut dyn ConnectFourModel,
    ) -> Result<LoopState, ControllerError> {
        if model.is_game_over() {
            return Ok(LoopState::Terminated(SessionOutcome::Finished));
        }

        self.view.display_game_state(&model.render())?;
        if let Some(player) = model.turn() {
            self.view.display_player_turn(player)?;
        }

        let token = self.input.next_token()?.ok_or(ControllerError::InputClosed)?;
        // Columns are 32-bit; wider numbers are reported as not a number.
        let column = match token.parse::<i32>() {
            Ok(column) => i64::from(column),
            Err(_) => {
                debug!(%token, "Token is not a number");
                self.view.display_error_message(NOT_A_NUMBER)?;
                self.input.discard_line();
                return Ok(LoopState::AwaitingMove);
            }
        };

        if column == QUIT_TOKEN {
            info!("Player quit");
            self.view.display_game_quit(&model.render())?;
            return Ok(LoopState::Terminated(SessionOutcome::Quit));
        }

        match model.make_move(column) {
            Ok(player) => {
                debug!(?player, column, "Move accepted");
                if model.is_game_over() {
                    Ok(LoopState::GameOverPromptingReplay)
                } else {
                    Ok(LoopState::AwaitingMove)
                }
            }
            Err(e) => {
                debug!(column, reason = %e, "Move rejected");
                self.view.display_invalid_number(&e.to_string())?;
                Ok(LoopState::AwaitingMove)
            }
        }
    }

    /// Shows the final board and outcome, then asks for a replay.
    fn prompt_replay(
        &mut self,
        model: &mut dyn ConnectFourModel,
    ) -> Result<LoopState, ControllerError> {
        let winner = model.winner();
        info!(?winner, "Game over");

        self.view.display_game_state(&model.render())?;
        self.view.display_game_over(winner)?;
        self.view.ask_play_again()?;

        match self.input.next_token()? {
            Some(answer) if is_affirmative(&answer) => {
                model.reset_board();
                info!("Starting another game");
                Ok(LoopState::AwaitingMove)
            }
            Some(_) => Ok(LoopState::Terminated(SessionOutcome::Finished)),
            None => {
                warn!("Input closed at replay prompt");
                Ok(LoopState::Terminated(SessionOutcome::Finished))
            }
        }
    }
}

/// `y` or `yes`, in any case.
pub fn is_affirmative(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
