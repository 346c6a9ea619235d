//! Resolves who is playing before the first move.

use crate::config::GameConfig;
use crate::console::Terminal;
use anyhow::Result;
use tictactoe_engine::Difficulty;
use tracing::{info, instrument};

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name of the human player.
    pub player_name: String,
    /// Opponent tier.
    pub difficulty: Difficulty,
    /// Seed for the random opponent.
    pub seed: Option<u64>,
}

impl Settings {
    /// Takes what the config provides and asks for the rest.
    ///
    /// Prints the introductions either way so the player sees who uses
    /// which marker.
    #[instrument(skip_all)]
    pub fn resolve(config: &GameConfig, terminal: &mut dyn Terminal) -> Result<Self> {
        let player_name = match config.player_name() {
            Some(name) => name.clone(),
            None => ask_name(terminal)?,
        };
        terminal.say(&format!("\n{} will use X.\n\n", player_name))?;

        let difficulty = match config.difficulty_tier() {
            Some(difficulty) => difficulty,
            None => ask_difficulty(terminal)?,
        };
        terminal.say(&format!(
            "You will be playing against {0}\n{0} will use O.\n\n",
            difficulty.persona()
        ))?;

        info!(player = %player_name, %difficulty, "Settings resolved");
        Ok(Self {
            player_name,
            difficulty,
            seed: *config.seed(),
        })
    }
}

fn ask_name(terminal: &mut dyn Terminal) -> Result<String> {
    loop {
        terminal.say("Enter Player One's name: ")?;
        let line = terminal.read_line()?;
        let name = line.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
    }
}

/// Any whole number is accepted; values other than 1-3 mean tier 0.
fn ask_difficulty(terminal: &mut dyn Terminal) -> Result<Difficulty> {
    loop {
        terminal.say(
            "How difficult do you want the enemy to be? \
             Enter a number between 0 (easiest) and 3 (hardest)\n\n",
        )?;
        let line = terminal.read_line()?;
        if let Ok(level) = line.trim().parse::<i64>() {
            return Ok(Difficulty::from_level(u8::try_from(level).unwrap_or(0)));
        }
    }
}
