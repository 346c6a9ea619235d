//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from
//! board storage so the search and the game state machine share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, Outcome, evaluate};
