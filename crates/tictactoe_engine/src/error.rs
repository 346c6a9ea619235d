//! Errors raised when a move is rejected.

use crate::Position;
use derive_more::{Display, Error};

/// Why a move could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// The square already holds a marker.
    #[display("Square {} is already occupied", _0.to_index())]
    Occupied(#[error(not(source))] Position),
}
