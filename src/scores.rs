//! Cumulative win and draw counters.

use crate::game::Phase;
use serde::{Deserialize, Serialize};
use tictac_rules::Player;
use tracing::{debug, instrument};

/// Running totals across games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scoreboard {
    /// Games won by X.
    pub x: u32,
    /// Games won by O.
    pub o: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Scoreboard {
    /// Creates an all-zero scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Returns false for a phase that is not over.
    #[instrument(skip(self))]
    pub fn record(&mut self, phase: Phase) -> bool {
        match phase {
            Phase::InProgress => return false,
            Phase::Won {
                winner: Player::X, ..
            } => self.x = self.x.saturating_add(1),
            Phase::Won {
                winner: Player::O, ..
            } => self.o = self.o.saturating_add(1),
            Phase::Draw => self.draws = self.draws.saturating_add(1),
        }
        debug!(x = self.x, o = self.o, draws = self.draws, "Score recorded");
        true
    }

    /// Wins for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> u32 {
        self.x.saturating_add(self.o).saturating_add(self.draws)
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X Wins: {}  O Wins: {}  Draws: {}",
            self.x, self.o, self.draws
        )
    }
}
