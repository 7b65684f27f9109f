//! Tic-tac-toe rules engine.
//!
//! A stateless engine over a fixed 3x3 [`Board`]:
//!
//! - [`evaluate_board`] detects a completed line or a full-board draw.
//! - [`empty_cells`] lists the open positions.
//! - [`choose_heuristic_move`] picks a move by a fixed priority policy
//!   (win, block, center, corner, anything), drawing randomness from a
//!   caller-supplied [`rand::Rng`].
//!
//! ```
//! use rand::SeedableRng;
//! use tictac_rules::{Board, Evaluation, Player, Position, choose_heuristic_move, evaluate_board};
//!
//! let board = Board::new()
//!     .with(Position::TopLeft, Player::X)
//!     .with(Position::TopCenter, Player::X);
//! assert_eq!(evaluate_board(&board), Evaluation::NoResult);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! assert_eq!(choose_heuristic_move(&board, Player::X, &mut rng), Some(Position::TopRight));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod heuristic;
mod position;
mod rules;
mod types;

pub use heuristic::{MoveReason, choose_heuristic_move, explain_heuristic_move};
pub use position::Position;
pub use rules::{Evaluation, LINES, Line, empty_cells, evaluate_board};
pub use types::{Board, Player, Square};
