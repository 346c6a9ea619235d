//! Tic-tac-toe game logic with a computer opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Square`]s addressed by [`Position`]
//! - **Rules**: line detection ([`evaluate`]) and draw detection
//! - **Search**: full-depth [`minimax`] scored by [`score`]
//! - **Strategy**: [`choose_opponent_move`] for strong tiers and
//!   [`choose_random_move`] for weak tiers, selected through [`Difficulty`]
//! - **Game**: validated, alternating play via [`Game`]
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Mark, Position, choose_opponent_move};
//!
//! let mut board = Board::new();
//! board.place(Position::TopLeft, Mark::Seeker);
//! board.place(Position::TopCenter, Mark::Seeker);
//! board.place(Position::Center, Mark::Opponent);
//!
//! // The seeker threatens the top row, so the opponent blocks it.
//! assert_eq!(choose_opponent_move(&mut board), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
mod score;
mod search;
mod strategy;
mod types;

pub use error::MoveError;
pub use game::{Game, GameStatus};
pub use position::Position;
pub use rules::{Outcome, evaluate, is_draw};
pub use score::{LOSS, WIN, score};
pub use search::{Turn, minimax};
pub use strategy::{Difficulty, Strategy, choose_opponent_move, choose_random_move};
pub use types::{Board, Mark, Square};
