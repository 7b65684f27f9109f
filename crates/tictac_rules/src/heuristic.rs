//! One-ply heuristic opponent.
//!
//! Rules, in priority order, first match wins:
//!
//! 1. Complete a line the player already holds two squares of.
//! 2. Block a line the opponent holds two squares of.
//! 3. Take the center.
//! 4. Take a random free corner.
//! 5. Take any random free square.
//!
//! This never looks further than the next move and can be beaten. It is
//! the casual opponent, not a solver.

use crate::rules::{LINES, empty_cells};
use crate::{Board, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which rule produced a heuristic move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveReason {
    /// Completes one of the mover's lines.
    #[display("win")]
    Win,
    /// Stops the opponent completing a line.
    #[display("block")]
    Block,
    /// Center square.
    #[display("center")]
    Center,
    /// A free corner.
    #[display("corner")]
    Corner,
    /// Any free square.
    #[display("random")]
    Random,
}

/// Picks a move for `player`, or `None` when the board is full.
///
/// Random choices draw from `rng`, so a seeded generator gives
/// reproducible play.
#[instrument(skip(board, rng))]
pub fn choose_heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<Position> {
    explain_heuristic_move(board, player, rng).map(|(pos, _)| pos)
}

/// Like [`choose_heuristic_move`], also reporting which rule fired.
#[instrument(skip(board, rng))]
pub fn explain_heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<(Position, MoveReason)> {
    let chosen = pick(board, player, rng);
    match chosen {
        Some((pos, reason)) => debug!(%player, position = %pos, %reason, "Heuristic move chosen"),
        None => debug!(%player, "No move available"),
    }
    chosen
}

fn pick<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<(Position, MoveReason)> {
    if let Some(pos) = completing_square(board, player) {
        return Some((pos, MoveReason::Win));
    }
    if let Some(pos) = completing_square(board, player.opponent()) {
        return Some((pos, MoveReason::Block));
    }
    if board.is_empty(Position::Center) {
        return Some((Position::Center, MoveReason::Center));
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|&pos| board.is_empty(pos))
        .collect();
    if let Some(&pos) = corners.choose(rng) {
        return Some((pos, MoveReason::Corner));
    }

    empty_cells(board)
        .choose(rng)
        .map(|&pos| (pos, MoveReason::Random))
}

/// Finds the empty square of the first line where `player` holds the
/// other two.
fn completing_square(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let held = line
            .iter()
            .filter(|&&pos| board.get(pos) == Square::Occupied(player))
            .count();
        let mut empties = line.iter().copied().filter(|&pos| board.is_empty(pos));
        match (held, empties.next(), empties.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn board(cells: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(cells.chars()) {
            match c {
                'X' => board.set(*pos, Square::Occupied(Player::X)),
                'O' => board.set(*pos, Square::Occupied(Player::O)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_takes_immediate_win() {
        let mv = explain_heuristic_move(&board("XX......."), Player::X, &mut rng());
        assert_eq!(mv, Some((Position::TopRight, MoveReason::Win)));
    }

    #[test]
    fn test_blocks_opponent() {
        let mv = explain_heuristic_move(&board("OO......."), Player::X, &mut rng());
        assert_eq!(mv, Some((Position::TopRight, MoveReason::Block)));
    }

    #[test]
    fn test_win_beats_block() {
        // O threatens the top row, X can finish the middle row.
        let mv = choose_heuristic_move(&board("OO.XX...."), Player::X, &mut rng());
        assert_eq!(mv, Some(Position::MiddleRight));
    }

    #[test]
    fn test_first_winning_line_in_canonical_order() {
        // X can finish the middle row (5), the left column (6) or the
        // diagonal (8); the row comes first.
        let mv = choose_heuristic_move(&board("X..XX...."), Player::X, &mut rng());
        assert_eq!(mv, Some(Position::MiddleRight));
    }

    #[test]
    fn test_ignores_line_already_blocked() {
        // Top row is X X O: no completing square anywhere.
        let mv = explain_heuristic_move(&board("XXO......"), Player::X, &mut rng());
        assert_eq!(mv, Some((Position::Center, MoveReason::Center)));
    }

    #[test]
    fn test_center_on_empty_board() {
        let mv = choose_heuristic_move(&Board::new(), Player::O, &mut rng());
        assert_eq!(mv, Some(Position::Center));
    }

    #[test]
    fn test_corner_when_center_taken() {
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (pos, reason) = explain_heuristic_move(&board("....X...."), Player::O, &mut rng)
                .expect("moves remain");
            assert!(pos.is_corner());
            assert_eq!(reason, MoveReason::Corner);
        }
    }

    #[test]
    fn test_corner_skips_taken_corners() {
        let b = board("O...X....");
        for seed in 0..32 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let pos = choose_heuristic_move(&b, Player::X, &mut rng).expect("moves remain");
            assert!(
                [Position::TopRight, Position::BottomLeft, Position::BottomRight].contains(&pos)
            );
        }
    }

    #[test]
    fn test_random_fallback_uses_empty_square() {
        // X O X / . X . / O X O: corners and center taken, no open threats.
        let b = board("XOX.X.OXO");
        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let (pos, reason) =
                explain_heuristic_move(&b, Player::O, &mut rng).expect("moves remain");
            assert_eq!(reason, MoveReason::Random);
            assert!([Position::MiddleLeft, Position::MiddleRight].contains(&pos));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mv = choose_heuristic_move(&board("XOXOXXOXO"), Player::X, &mut rng());
        assert_eq!(mv, None);
    }

    #[test]
    fn test_same_seed_same_move() {
        let b = board("....X....");
        let a = choose_heuristic_move(&b, Player::O, &mut ChaCha8Rng::seed_from_u64(99));
        let c = choose_heuristic_move(&b, Player::O, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, c);
    }
}
