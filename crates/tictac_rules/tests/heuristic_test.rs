//! Tests for the heuristic opponent through the public API.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictac_rules::{Board, Player, Position, Square, choose_heuristic_move, empty_cells};

fn cells(cells: [Option<Player>; 9]) -> Board {
    Board::from(cells)
}

const X: Option<Player> = Some(Player::X);
const O: Option<Player> = Some(Player::O);
const E: Option<Player> = None;

#[test]
fn test_completes_own_line() {
    let board = cells([X, X, E, E, E, E, E, E, E]);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        choose_heuristic_move(&board, Player::X, &mut rng).map(Position::to_index),
        Some(2)
    );
}

#[test]
fn test_blocks_opponent_line() {
    let board = cells([O, O, E, E, E, E, E, E, E]);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        choose_heuristic_move(&board, Player::X, &mut rng).map(Position::to_index),
        Some(2)
    );
}

#[test]
fn test_prefers_center_on_empty_board() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(
        choose_heuristic_move(&Board::new(), Player::X, &mut rng),
        Some(Position::Center)
    );
}

#[test]
fn test_takes_corner_after_center() {
    let board = cells([E, E, E, E, X, E, E, E, E]);
    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let index = choose_heuristic_move(&board, Player::O, &mut rng)
            .map(Position::to_index)
            .expect("board has room");
        assert!([0, 2, 6, 8].contains(&index), "seed {seed} picked {index}");
    }
}

#[test]
fn test_corner_choice_covers_every_corner() {
    let board = cells([E, E, E, E, X, E, E, E, E]);
    let mut seen = std::collections::HashSet::new();
    for seed in 0..256 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        if let Some(pos) = choose_heuristic_move(&board, Player::O, &mut rng) {
            seen.insert(pos);
        }
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn test_no_move_on_full_board() {
    let board = cells([X, O, X, X, O, O, O, X, X]);
    assert!(empty_cells(&board).is_empty());
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(choose_heuristic_move(&board, Player::O, &mut rng), None);
}

#[test]
fn test_self_play_always_finishes_legally() {
    use tictac_rules::{Evaluation, evaluate_board};

    for seed in 0..50 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut player = Player::X;
        let mut moves = 0;
        while evaluate_board(&board) == Evaluation::NoResult {
            let pos = choose_heuristic_move(&board, player, &mut rng).expect("game not over");
            assert_eq!(board.get(pos), Square::Empty);
            board.set(pos, Square::Occupied(player));
            player = player.opponent();
            moves += 1;
        }
        assert!(moves <= 9);
    }
}
