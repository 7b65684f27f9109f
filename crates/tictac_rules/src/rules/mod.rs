//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here keeps state
//! between calls, so every function is safe to call from any thread.

mod empty;
mod evaluate;
mod lines;

pub use empty::empty_cells;
pub use evaluate::{Evaluation, evaluate_board};
pub use lines::{LINES, Line};
