//! Computer opponent driven by a difficulty tier.

use super::Player;
use crate::console::Terminal;
use anyhow::{Result, anyhow};
use rand::Rng;
use tictactoe_engine::{Difficulty, Game, Position};
use tracing::{debug, instrument};

/// Computer player whose strength comes from its [`Difficulty`].
pub struct ComputerPlayer<G> {
    difficulty: Difficulty,
    rng: G,
}

impl<G: Rng> ComputerPlayer<G> {
    /// Creates a computer player. `rng` drives the random tiers.
    pub fn new(difficulty: Difficulty, rng: G) -> Self {
        Self { difficulty, rng }
    }

    /// The player's tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl<G: Rng> Player for ComputerPlayer<G> {
    #[instrument(skip_all, fields(ai = %self.difficulty))]
    fn choose_move(&mut self, game: &Game, _terminal: &mut dyn Terminal) -> Result<Position> {
        let mut board = *game.board();
        let strategy = self.difficulty.strategy();
        let pos = strategy
            .choose(&mut board, &mut self.rng)
            .ok_or_else(|| anyhow!("No valid moves available"))?;

        debug!(?strategy, position = pos.to_index(), "AI chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        self.difficulty.persona()
    }
}
