//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe against a computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe on the console against a computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Player name (prompted for if not set here or in the config)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Opponent difficulty: 0 (easiest) to 3 (hardest)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub difficulty: Option<u8>,

    /// Seed for the random opponent, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}
