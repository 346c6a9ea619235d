//! Tic-tac-toe on the console.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tictactoe_console::{Cli, ComputerPlayer, Console, GameConfig, HumanPlayer, Session, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config =
        GameConfig::load_or_default(&cli.config)?.with_overrides(cli.name, cli.difficulty, cli.seed);

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    let settings = Settings::resolve(&config, &mut console)?;

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new(
        console,
        Box::new(HumanPlayer::new(settings.player_name)),
        Box::new(ComputerPlayer::new(settings.difficulty, rng)),
    );
    let status = session.run()?;
    info!(?status, "Session finished");

    Ok(())
}
