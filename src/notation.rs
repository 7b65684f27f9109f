//! Compact text notation for boards.

use derive_more::{Display, Error};
use tictac_rules::{Board, Player, Position, Square};

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Not exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character that is not a mark or an empty cell.
    #[display("Unexpected character {:?} in board", _0)]
    BadCell(#[error(not(source))] char),
}

/// Parses nine row-major cells.
///
/// `X`/`x` and `O`/`o` are marks; `.`, `-`, `_` and digits are empty.
/// Whitespace, `|` and `/` are ignored so `"XO./.X./..O"` also parses.
pub fn parse_board(text: &str) -> Result<Board, ParseBoardError> {
    let cells: Vec<char> = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
        .collect();
    if cells.len() != 9 {
        return Err(ParseBoardError::WrongLength(cells.len()));
    }

    let mut board = Board::new();
    for (pos, c) in Position::ALL.into_iter().zip(cells) {
        let square = match c {
            'X' | 'x' => Square::Occupied(Player::X),
            'O' | 'o' => Square::Occupied(Player::O),
            '.' | '-' | '_' | '1'..='9' => Square::Empty,
            other => return Err(ParseBoardError::BadCell(other)),
        };
        board.set(pos, square);
    }
    Ok(board)
}

/// Formats a board in the notation [`parse_board`] reads.
pub fn format_board(board: &Board) -> String {
    board
        .squares()
        .iter()
        .map(|s| match s {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        })
        .collect()
}
