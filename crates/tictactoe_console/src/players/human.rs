//! Human player typing positions on the console.

use super::Player;
use crate::console::Terminal;
use anyhow::Result;
use tictactoe_engine::{Game, Position};
use tracing::debug;

/// Human player entering board indices 0-8.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn choose_move(&mut self, game: &Game, terminal: &mut dyn Terminal) -> Result<Position> {
        loop {
            terminal.say(&format!(
                "{}, please enter a position number (0-8): \n",
                self.name
            ))?;
            let line = terminal.read_line()?;

            let Some(pos) = Position::parse_index(&line) else {
                debug!(input = %line, "Rejected input");
                terminal.say("\nPlease enter a number between 0 and 8.\n")?;
                continue;
            };

            if !game.board().is_empty(pos) {
                debug!(position = pos.to_index(), "Square taken");
                terminal.say(
                    "\nThis spot has already been chosen. Please choose a new position.\n",
                )?;
                continue;
            }

            return Ok(pos);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
