//! Console front end for tic-tac-toe against a computer opponent.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus CLI overrides ([`GameConfig`], [`Cli`])
//! - **Setup**: prompts for whatever the config left out ([`Settings`])
//! - **Players**: [`HumanPlayer`] on the console, [`ComputerPlayer`] by tier
//! - **Session**: the alternating game loop ([`Session`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod players;
mod session;
mod setup;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use console::{Console, Terminal};
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use session::Session;
pub use setup::Settings;
