//! Text rendering of prompts, errors, and outcomes.

use std::io::{self, Write};
use strictly_connect_four::Player;

/// Display collaborator for the console loop.
///
/// One method per protocol message. Every method writes a complete line.
pub trait GameView {
    /// Shows a board snapshot.
    fn display_game_state(&mut self, state: &str) -> io::Result<()>;

    /// Asks `player` for a column.
    fn display_player_turn(&mut self, player: Player) -> io::Result<()>;

    /// Reports input that could not be read as a move.
    fn display_error_message(&mut self, message: &str) -> io::Result<()>;

    /// Reports a move the model rejected, with the model's reason.
    fn display_invalid_number(&mut self, message: &str) -> io::Result<()>;

    /// Announces the winner, or a tie for `None`.
    fn display_game_over(&mut self, winner: Option<Player>) -> io::Result<()>;

    /// Asks whether to start another game.
    fn ask_play_again(&mut self) -> io::Result<()>;

    /// Announces that the player quit, followed by the final snapshot.
    fn display_game_quit(&mut self, state: &str) -> io::Result<()>;
}

/// [`GameView`] writing plain text lines to any [`Write`] sink.
#[derive(Debug)]
pub struct ConsoleView<W> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    /// Creates a view over an output sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Borrows the underlying sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Returns the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

impl<W: Write> GameView for ConsoleView<W> {
    fn display_game_state(&mut self, state: &str) -> io::Result<()> {
        self.line(state)
    }

    fn display_player_turn(&mut self, player: Player) -> io::Result<()> {
        self.line(&format!(
            "Player {}, make your move: ",
            player.display_name()
        ))
    }

    fn display_error_message(&mut self, message: &str) -> io::Result<()> {
        self.line(message)
    }

    fn display_invalid_number(&mut self, message: &str) -> io::Result<()> {
        self.line(&format!("Not a valid number: {}", message))
    }

    fn display_game_over(&mut self, winner: Option<Player>) -> io::Result<()> {
        match winner {
            Some(player) => self.line(&format!(
                "Game over! {} is the winner!",
                player.display_name()
            )),
            None => self.line("Game over! It's a tie!"),
        }
    }

    fn ask_play_again(&mut self) -> io::Result<()> {
        self.line("Do you want to play again? (yes/no)")
    }

    fn display_game_quit(&mut self, state: &str) -> io::Result<()> {
        self.line("Game quit! Ending game state:")?;
        self.line(state)
    }
}
