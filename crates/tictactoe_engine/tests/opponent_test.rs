//! Tests for the computer opponent's move selection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{
    Board, Mark, Position, Square, Turn, choose_opponent_move, choose_random_move, evaluate,
    minimax,
};

const X: Square = Square::Occupied(Mark::Seeker);
const O: Square = Square::Occupied(Mark::Opponent);
const E: Square = Square::Empty;

fn pos(idx: usize) -> Position {
    Position::from_index(idx).unwrap()
}

#[test]
fn test_last_empty_cell_is_chosen() {
    // X O X / X O O / O X _
    let mut board = Board::from_squares([X, O, X, X, O, O, O, X, E]);
    assert_eq!(choose_opponent_move(&mut board), Some(Position::BottomRight));

    // X O X / _ O X / O X O
    let mut board = Board::from_squares([X, O, X, E, O, X, O, X, O]);
    assert_eq!(evaluate(&board).winner(), None);
    assert_eq!(choose_opponent_move(&mut board), Some(Position::MiddleLeft));
}

#[test]
fn test_immediate_win_is_taken() {
    // Seeker threatens index 2, but the opponent completes the middle row first.
    let mut board = Board::from_squares([X, X, E, O, O, E, E, E, E]);
    assert_eq!(choose_opponent_move(&mut board), Some(Position::MiddleRight));
}

#[test]
fn test_immediate_win_beats_slower_win() {
    // O wins at once on the 2-4-6 diagonal; nothing else scores as high.
    let mut board = Board::from_squares([X, X, O, E, O, E, E, X, E]);
    assert_eq!(choose_opponent_move(&mut board), Some(Position::BottomLeft));
}

#[test]
fn test_blocks_seeker_threat() {
    let mut board = Board::from_squares([X, X, E, E, O, E, E, E, E]);
    assert_eq!(choose_opponent_move(&mut board), Some(Position::TopRight));

    // Column threat on 0-3-6.
    let mut board = Board::from_squares([X, E, E, X, O, E, E, E, E]);
    assert_eq!(choose_opponent_move(&mut board), Some(Position::BottomLeft));
}

#[test]
fn test_board_unchanged_after_selection() {
    let original = Board::from_squares([X, E, E, E, O, E, E, E, X]);
    let mut board = original;
    choose_opponent_move(&mut board);
    assert_eq!(board, original);

    let mut board = Board::new();
    choose_opponent_move(&mut board);
    assert_eq!(board, Board::new());
}

#[test]
fn test_empty_board_opening_is_a_forced_draw() {
    let mut board = Board::new();
    let choice = choose_opponent_move(&mut board).unwrap();
    assert!([0, 2, 4, 6, 8].contains(&choice.to_index()));

    board.place(choice, Mark::Opponent);
    assert_eq!(minimax(&mut board, 0, Turn::Minimizing), 0);
}

#[test]
fn test_opening_tie_goes_to_lowest_index() {
    let mut board = Board::new();
    assert_eq!(choose_opponent_move(&mut board), Some(Position::TopLeft));
}

/// Plays every possible seeker line against the opponent and checks the
/// seeker never completes a line.
fn assert_seeker_never_wins(board: &mut Board) {
    if evaluate(board).winner().is_some() || board.is_full() {
        assert_ne!(evaluate(board).winner(), Some(Mark::Seeker), "\n{board}");
        return;
    }

    for idx in 0..9 {
        let seeker = pos(idx);
        if !board.is_empty(seeker) {
            continue;
        }

        let before = *board;
        board.place(seeker, Mark::Seeker);
        if evaluate(board).winner().is_none() && !board.is_full() {
            let reply = choose_opponent_move(board).unwrap();
            board.place(reply, Mark::Opponent);
        }
        assert_seeker_never_wins(board);
        *board = before;
    }
}

#[test]
fn test_optimal_opponent_never_loses_when_seeker_moves_first() {
    assert_seeker_never_wins(&mut Board::new());
}

#[test]
fn test_random_move_is_always_empty() {
    let board = Board::from_squares([X, O, E, X, O, E, E, E, X]);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let choice = choose_random_move(&board, &mut rng).unwrap();
        assert!(board.is_empty(choice));
    }
}

#[test]
fn test_random_move_single_empty_cell() {
    let board = Board::from_squares([X, O, X, X, O, O, O, E, X]);
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        assert_eq!(choose_random_move(&board, &mut rng), Some(Position::BottomCenter));
    }
}

#[test]
fn test_random_move_is_reproducible_with_seed() {
    let board = Board::new();
    let picks = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20)
            .map(|_| choose_random_move(&board, &mut rng).unwrap())
            .collect::<Vec<_>>()
    };
    assert_eq!(picks(11), picks(11));
}

#[test]
fn test_random_move_reaches_every_empty_cell() {
    let board = Board::from_squares([X, E, O, E, E, X, E, O, E]);
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = [false; 9];
    for _ in 0..500 {
        seen[choose_random_move(&board, &mut rng).unwrap().to_index()] = true;
    }
    for idx in 0..9 {
        assert_eq!(seen[idx], board.is_empty(pos(idx)), "index {idx}");
    }
}
