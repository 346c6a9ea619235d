//! Line detection for tic-tac-toe.

use crate::{Board, Mark, Position, Square};

/// The 8 winning triples: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Whether a completed line exists on a board.
///
/// A full board without a line is not an outcome; callers detect the
/// draw separately with [`Board::is_full`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No line is complete.
    NoLineYet,
    /// The marker owns a complete line.
    WonBy(Mark),
}

impl Outcome {
    /// The winning marker, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::NoLineYet => None,
            Outcome::WonBy(mark) => Some(mark),
        }
    }
}

/// Reports the owner of the first complete line, scanning rows, columns
/// and diagonals in that order.
///
/// Called at every search node; not instrumented.
pub fn evaluate(board: &Board) -> Outcome {
    for [a, b, c] in LINES {
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == Square::Occupied(mark)
            && board.get(c) == Square::Occupied(mark)
        {
            return Outcome::WonBy(mark);
        }
    }

    Outcome::NoLineYet
}
