//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// Marker placed on the board by one of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player, plays X and moves first.
    Seeker,
    /// The computer player, plays O.
    Opponent,
}

impl Mark {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Mark::Seeker => Mark::Opponent,
            Mark::Opponent => Mark::Seeker,
        }
    }

    /// Returns the symbol drawn for this marker.
    pub fn symbol(self) -> char {
        match self {
            Mark::Seeker => 'X',
            Mark::Opponent => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a marker.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order, so index 0-2 is the top row,
/// 3-5 the middle row and 6-8 the bottom row. Addressing goes through
/// [`Position`], which makes an out-of-range index unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places a marker at the given position.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        self.set(pos, Square::Occupied(mark));
    }

    /// Empties the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of empty squares left.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    /// Empty cells show their index so the player knows what to type.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let idx = row * 3 + col;
                match self.squares[idx] {
                    Square::Empty => write!(f, "{}", idx)?,
                    Square::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, " | ")?;
                }
            }
            writeln!(f)?;
            if row < 2 {
                writeln!(f, "---------")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), 9);
        assert!(!board.is_full());
        assert!(Position::ALL.iter().all(|&p| board.is_empty(p)));
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::Opponent);
        assert_eq!(board.get(Position::Center), Square::Occupied(Mark::Opponent));
        assert_eq!(board.empty_count(), 8);

        board.clear(Position::Center);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_layout() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::Seeker);
        board.place(Position::Center, Mark::Opponent);
        assert_eq!(
            board.to_string(),
            "X | 1 | 2\n---------\n3 | O | 5\n---------\n6 | 7 | 8\n"
        );
    }

    #[test]
    fn test_mark_other() {
        assert_eq!(Mark::Seeker.other(), Mark::Opponent);
        assert_eq!(Mark::Opponent.other(), Mark::Seeker);
    }
}
