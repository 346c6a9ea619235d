//! Full-depth minimax over the tic-tac-toe game tree.
//!
//! The opponent is the maximizing side and the seeker the minimizing
//! side. Terminal scores are adjusted by depth so the opponent prefers
//! the fastest win and, when losing is forced, the slowest loss.
//!
//! The search explores a single board by backtracking: each candidate
//! mark is placed, the subtree is searched, and the square is emptied
//! again before the next candidate. No pruning and no transposition
//! cache; a 3x3 board is small enough to search exhaustively.

use crate::score::{LOSS, WIN, score};
use crate::types::Mark;
use crate::{Board, Position};

/// Which side moves at a ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The opponent moves and the highest value is kept.
    Maximizing,
    /// The seeker moves and the lowest value is kept.
    Minimizing,
}

impl Turn {
    /// Marker placed by the side to move.
    pub fn mark(self) -> Mark {
        match self {
            Turn::Maximizing => Mark::Opponent,
            Turn::Minimizing => Mark::Seeker,
        }
    }

    /// The side moving at the next ply.
    pub fn next(self) -> Self {
        match self {
            Turn::Maximizing => Turn::Minimizing,
            Turn::Minimizing => Turn::Maximizing,
        }
    }
}

/// Game-theoretic value of `board` with `turn` to move, `depth` plies
/// below the root.
///
/// The board is mutated during the call and restored before it returns.
pub fn minimax(board: &mut Board, depth: i32, turn: Turn) -> i32 {
    match score(board) {
        WIN => return WIN - depth,
        LOSS => return LOSS + depth,
        _ => {}
    }
    if board.is_full() {
        return 0;
    }

    let mut best = match turn {
        Turn::Maximizing => i32::MIN,
        Turn::Minimizing => i32::MAX,
    };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.place(pos, turn.mark());
        let value = minimax(board, depth + 1, turn.next());
        board.clear(pos);

        best = match turn {
            Turn::Maximizing => best.max(value),
            Turn::Minimizing => best.min(value),
        };
    }

    best
}
