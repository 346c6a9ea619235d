//! Static scoring of a board from the opponent's point of view.

use crate::Board;
use crate::rules::{Outcome, evaluate};
use crate::types::Mark;

/// Score of a board the opponent has won.
pub const WIN: i32 = 10;

/// Score of a board the seeker has won.
pub const LOSS: i32 = -WIN;

/// Maps the board's outcome to +10 (opponent line), -10 (seeker line) or 0.
///
/// No depth adjustment happens here; the search applies it.
pub fn score(board: &Board) -> i32 {
    match evaluate(board) {
        Outcome::NoLineYet => 0,
        Outcome::WonBy(Mark::Opponent) => WIN,
        Outcome::WonBy(Mark::Seeker) => LOSS,
    }
}
