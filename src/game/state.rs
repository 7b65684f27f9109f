//! Explicit game state: board, whose turn, and phase.

use super::MoveError;
use serde::{Deserialize, Serialize};
use tictac_rules::{Board, Evaluation, Line, Player, Position, Square, evaluate_board};
use tracing::{debug, info, instrument};

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// `winner` completed `line`.
    Won {
        /// The winning player.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// Board full, nobody won.
    Draw,
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Phase::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<Evaluation> for Phase {
    fn from(eval: Evaluation) -> Self {
        match eval {
            Evaluation::NoResult => Phase::InProgress,
            Evaluation::Draw => Phase::Draw,
            Evaluation::Win { player, line } => Phase::Won {
                winner: player,
                line,
            },
        }
    }
}

/// Complete game state.
///
/// Every move goes through [`GameState::play`], which re-evaluates the
/// board, so `phase` always agrees with `board`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    turn: Player,
    phase: Phase,
    history: Vec<Position>,
}

impl GameState {
    /// Creates a new game with X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            phase: Phase::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the last mover once the game is over).
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the positions played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns the phase after the move. The turn passes only when play
    /// continues.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn play(&mut self, pos: Position) -> Result<Phase, MoveError> {
        if self.phase.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.turn));
        self.history.push(pos);
        self.phase = evaluate_board(&self.board).into();
        debug!(position = %pos, phase = ?self.phase, "Move applied");

        match self.phase {
            Phase::InProgress => self.turn = self.turn.opponent(),
            Phase::Won { winner, .. } => info!(%winner, "Game won"),
            Phase::Draw => info!("Game drawn"),
        }
        Ok(self.phase)
    }

    /// Replays moves from the initial state.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for &pos in moves {
            state.play(pos)?;
        }
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
