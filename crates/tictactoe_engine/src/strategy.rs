//! Move selection for the computer opponent.

use crate::search::{Turn, minimax};
use crate::types::Mark;
use crate::{Board, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Picks the opponent's optimal move by full-depth minimax.
///
/// Every empty square is tried in ascending order: the opponent's marker
/// is placed, the seeker's best reply is searched, and the square is
/// emptied again. The first square with the strictly highest value wins,
/// so ties go to the lowest index.
///
/// Returns `None` when the board has no empty square. The board is left
/// exactly as it was passed in; the caller applies the chosen move.
#[instrument(skip(board), fields(empty = board.empty_count()))]
pub fn choose_opponent_move(board: &mut Board) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }

        board.place(pos, Mark::Opponent);
        let value = minimax(board, 0, Turn::Minimizing);
        board.clear(pos);

        debug!(position = pos.to_index(), value, "Evaluated candidate");
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }

    best.map(|(pos, value)| {
        debug!(position = pos.to_index(), value, "Chose optimal move");
        pos
    })
}

/// Picks a uniformly random empty square by rejection sampling.
///
/// Indices 0-8 are drawn from `rng` until one addresses an empty square.
/// Returns `None` on a full board instead of sampling forever.
#[instrument(skip(board, rng), fields(empty = board.empty_count()))]
pub fn choose_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    if board.is_full() {
        return None;
    }

    loop {
        let pos = Position::ALL[rng.gen_range(0..9)];
        if board.is_empty(pos) {
            debug!(position = pos.to_index(), "Chose random move");
            return Some(pos);
        }
    }
}

/// How the computer picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Full-depth minimax.
    Optimal,
    /// Uniformly random empty square.
    Random,
}

impl Strategy {
    /// Chooses a move for the opponent on `board`.
    ///
    /// `rng` is only consulted by [`Strategy::Random`].
    #[instrument(skip(board, rng))]
    pub fn choose<R: Rng + ?Sized>(self, board: &mut Board, rng: &mut R) -> Option<Position> {
        match self {
            Strategy::Optimal => choose_opponent_move(board),
            Strategy::Random => choose_random_move(board, rng),
        }
    }
}

/// Difficulty tier of the computer opponent, 0 (easiest) to 3 (hardest).
///
/// Each tier has a persona name. Tiers 0 and 1 both play randomly and
/// tiers 2 and 3 both play optimally.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Difficulty {
    /// Tier 0.
    #[default]
    AgentSmith,
    /// Tier 1.
    Skynet,
    /// Tier 2.
    Gladys,
    /// Tier 3.
    Hal9000,
}

impl Difficulty {
    /// Maps a tier number to a difficulty. Anything but 1-3 is tier 0.
    #[instrument]
    pub fn from_level(level: u8) -> Self {
        match level {
            3 => Difficulty::Hal9000,
            2 => Difficulty::Gladys,
            1 => Difficulty::Skynet,
            _ => Difficulty::AgentSmith,
        }
    }

    /// Tier number, 0-3.
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Name of the computer persona at this tier.
    pub fn persona(self) -> &'static str {
        match self {
            Difficulty::AgentSmith => "Agent Smith",
            Difficulty::Skynet => "Skynet",
            Difficulty::Gladys => "Gladys",
            Difficulty::Hal9000 => "HAL 9000",
        }
    }

    /// Move selection used at this tier.
    pub fn strategy(self) -> Strategy {
        match self {
            Difficulty::Gladys | Difficulty::Hal9000 => Strategy::Optimal,
            Difficulty::AgentSmith | Difficulty::Skynet => Strategy::Random,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.persona())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_level() {
        assert_eq!(Difficulty::from_level(3), Difficulty::Hal9000);
        assert_eq!(Difficulty::from_level(2), Difficulty::Gladys);
        assert_eq!(Difficulty::from_level(1), Difficulty::Skynet);
        assert_eq!(Difficulty::from_level(0), Difficulty::AgentSmith);
        assert_eq!(Difficulty::from_level(42), Difficulty::AgentSmith);
    }

    #[test]
    fn test_level_round_trip() {
        for difficulty in Difficulty::iter() {
            assert_eq!(Difficulty::from_level(difficulty.level()), difficulty);
        }
    }

    #[test]
    fn test_tier_strategies() {
        assert_eq!(Difficulty::AgentSmith.strategy(), Strategy::Random);
        assert_eq!(Difficulty::Skynet.strategy(), Strategy::Random);
        assert_eq!(Difficulty::Gladys.strategy(), Strategy::Optimal);
        assert_eq!(Difficulty::Hal9000.strategy(), Strategy::Optimal);
    }

    #[test]
    fn test_personas() {
        assert_eq!(Difficulty::Hal9000.persona(), "HAL 9000");
        assert_eq!(Difficulty::AgentSmith.to_string(), "Agent Smith");
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::Seeker } else { Mark::Opponent };
            board.place(pos, mark);
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(choose_opponent_move(&mut board), None);
        assert_eq!(choose_random_move(&board, &mut rng), None);
    }

    #[test]
    fn test_random_strategy_ignores_minimax() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(99);
        let pos = Strategy::Random.choose(&mut board, &mut rng);
        assert!(pos.is_some());
        assert_eq!(board, Board::new());
    }
}
