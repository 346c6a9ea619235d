//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Terminal;
use anyhow::Result;
use tictactoe_engine::{Game, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns an empty position on the game's board.
    fn choose_move(&mut self, game: &Game, terminal: &mut dyn Terminal) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
