//! The game loop: human against computer until someone wins or the board fills.

use crate::console::Terminal;
use crate::players::Player;
use anyhow::Result;
use tictactoe_engine::{Game, GameStatus, Mark};
use tracing::{debug, info, instrument};

/// One game between the seeker (X, moves first) and the opponent (O).
pub struct Session<T> {
    game: Game,
    seeker: Box<dyn Player>,
    opponent: Box<dyn Player>,
    terminal: T,
}

impl<T: Terminal> Session<T> {
    /// Creates a session on a fresh board.
    pub fn new(terminal: T, seeker: Box<dyn Player>, opponent: Box<dyn Player>) -> Self {
        Self {
            game: Game::new(),
            seeker,
            opponent,
            terminal,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the session and returns its terminal.
    pub fn into_terminal(self) -> T {
        self.terminal
    }

    /// Runs the game loop and returns the final status.
    #[instrument(skip(self), fields(seeker = self.seeker.name(), opponent = self.opponent.name()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting game");

        loop {
            self.show_board()?;

            let player = match self.game.to_move() {
                Mark::Seeker => &mut self.seeker,
                Mark::Opponent => &mut self.opponent,
            };
            self.terminal
                .say(&format!("\n{}'s turn: \n", player.name()))?;

            debug!(player = player.name(), "Waiting for move");
            let pos = player.choose_move(&self.game, &mut self.terminal)?;
            let status = self.game.make_move(pos)?;
            debug!(position = pos.to_index(), ?status, "Move made");

            if status != GameStatus::InProgress {
                self.announce(status)?;
                return Ok(status);
            }
        }
    }

    fn show_board(&mut self) -> Result<()> {
        self.terminal
            .say(&format!("{}\n\n", self.game.board()))
    }

    fn announce(&mut self, status: GameStatus) -> Result<()> {
        self.show_board()?;
        match status {
            GameStatus::Won(mark) => {
                let name = match mark {
                    Mark::Seeker => self.seeker.name(),
                    Mark::Opponent => self.opponent.name(),
                };
                info!(winner = name, "Game over");
                let text = format!("\n{} wins!\nGame Over\n", name);
                self.terminal.say(&text)
            }
            GameStatus::Draw => {
                info!("Game over, draw");
                self.terminal.say("It's a Draw!\nGame Over\n")
            }
            GameStatus::InProgress => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Console;
    use crate::players::{ComputerPlayer, HumanPlayer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tictactoe_engine::{Difficulty, Position};

    #[test]
    fn test_seeker_moves_first() {
        let console = Console::new("0\n".as_bytes(), Vec::new());
        let mut session = Session::new(
            console,
            Box::new(HumanPlayer::new("Dave")),
            Box::new(ComputerPlayer::new(Difficulty::Hal9000, StdRng::seed_from_u64(0))),
        );

        // Input runs out on the seeker's second turn.
        assert!(session.run().is_err());
        assert_eq!(session.game().history().len(), 2);
        assert_eq!(session.game().history()[0], Position::TopLeft);
        // Against a corner opening the only safe reply is the center.
        assert_eq!(session.game().history()[1], Position::Center);
    }
}
