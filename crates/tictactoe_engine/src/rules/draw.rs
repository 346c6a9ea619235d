//! Draw detection for tic-tac-toe.

use super::win::{Outcome, evaluate};
use crate::Board;

/// A full board with no complete line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && evaluate(board) == Outcome::NoLineYet
}
