//! Open squares.

use crate::{Board, Position};
use tracing::instrument;

/// Returns the empty positions in ascending index order.
///
/// An empty result means the board is full.
#[instrument(skip(board))]
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}
