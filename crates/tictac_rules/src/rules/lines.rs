//! The eight winnable lines.

use crate::Position;

/// Three positions that win when held by one player.
pub type Line = [Position; 3];

/// Every winnable line in canonical order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
///
/// Evaluation and move selection both scan this table front to back, so
/// the order decides which line is reported when several qualify.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];
