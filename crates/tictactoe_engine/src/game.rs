//! Validated game state for one session.

use crate::error::MoveError;
use crate::rules::{Outcome, evaluate, is_draw};
use crate::types::Mark;
use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

/// Tic-tac-toe game engine.
///
/// The seeker always moves first and the sides alternate. The board is
/// created once and only ever gains markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::Seeker,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Whether the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    /// Places the side-to-move's marker at `pos`.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        self.board.place(pos, self.to_move);
        self.history.push(pos);
        self.to_move = self.to_move.other();
        self.update_status();

        Ok(self.status)
    }

    /// Updates game status after a move.
    fn update_status(&mut self) {
        if let Outcome::WonBy(mark) = evaluate(&self.board) {
            info!(winner = %mark, moves = self.history.len(), "Game won");
            self.status = GameStatus::Won(mark);
        } else if is_draw(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
