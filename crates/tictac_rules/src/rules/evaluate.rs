//! Win and draw detection.

use super::lines::{LINES, Line};
use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What a board position means for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// Play continues.
    NoResult,
    /// Every square is taken and no line is complete.
    Draw,
    /// `player` holds all three squares of `line`.
    Win {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
    },
}

impl Evaluation {
    /// Returns true for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Evaluation::NoResult)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Evaluation::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Evaluation::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns the board indices of the completed line.
    pub fn winning_indices(&self) -> Option<[usize; 3]> {
        self.winning_line().map(|line| line.map(Position::to_index))
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluation::NoResult => write!(f, "In progress"),
            Evaluation::Draw => write!(f, "Draw"),
            Evaluation::Win { player, .. } => write!(f, "Player {} wins", player),
        }
    }
}

/// Evaluates the board.
///
/// Lines are checked in [`LINES`] order and the first complete one is
/// reported, even if a malformed position completes more than one.
#[instrument(skip(board))]
pub fn evaluate_board(board: &Board) -> Evaluation {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Evaluation::Win { player, line };
        }
    }

    if board.is_full() {
        Evaluation::Draw
    } else {
        Evaluation::NoResult
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_empty_board_has_no_result() {
        assert_eq!(evaluate_board(&Board::new()), Evaluation::NoResult);
    }

    #[test]
    fn test_winner_top_row() {
        let eval = evaluate_board(&board("XXXOO...."));
        assert_eq!(eval.winner(), Some(Player::X));
        assert_eq!(eval.winning_indices(), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_column() {
        let eval = evaluate_board(&board("XO.XO..O."));
        assert_eq!(
            eval,
            Evaluation::Win {
                player: Player::O,
                line: [Position::TopCenter, Position::Center, Position::BottomCenter],
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let eval = evaluate_board(&board("XXO.O.O.X"));
        assert_eq!(eval.winner(), Some(Player::O));
        assert_eq!(eval.winning_indices(), Some([2, 4, 6]));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        assert_eq!(evaluate_board(&board("XOXOXXOXO")), Evaluation::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        // X X X / O O X / X O O
        let eval = evaluate_board(&board("XXXOOXXOO"));
        assert_eq!(eval.winner(), Some(Player::X));
    }

    #[test]
    fn test_first_line_wins_tie_break() {
        // Top row and left column both complete for X; row comes first.
        let eval = evaluate_board(&board("XXXXOOXO."));
        assert_eq!(eval.winning_indices(), Some([0, 1, 2]));

        // Left column and main diagonal; column comes first.
        let eval = evaluate_board(&board("XOOXX.XOX"));
        assert_eq!(eval.winning_indices(), Some([0, 3, 6]));
    }

    #[test]
    fn test_incomplete_line_is_no_result() {
        assert_eq!(evaluate_board(&board("XX.......")), Evaluation::NoResult);
        assert_eq!(evaluate_board(&board("XXO......")), Evaluation::NoResult);
    }

    #[test]
    fn test_terminal() {
        assert!(!Evaluation::NoResult.is_terminal());
        assert!(Evaluation::Draw.is_terminal());
        assert!(evaluate_board(&board("OOO......")).is_terminal());
    }
}
