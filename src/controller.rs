//! Game controller: state machine, scoring, settings and the computer turn.

use crate::game::{GameState, MoveError, Phase};
use crate::persistence::Persistence;
use crate::scheduler::{ControllerEvent, TurnScheduler};
use crate::scores::Scoreboard;
use crate::settings::{GameMode, Settings};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tictac_rules::{Player, Position, choose_heuristic_move};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// The human's mark when playing the computer.
pub const HUMAN_PLAYER: Player = Player::X;

/// Drives one table of games.
///
/// Owns the [`GameState`] and everything around it. Must live inside a
/// tokio runtime because computer turns are scheduled as tasks; their
/// [`ControllerEvent`]s arrive on the receiver returned by
/// [`GameController::new`] and are fed back through
/// [`GameController::handle_event`].
#[derive(Debug)]
pub struct GameController {
    state: GameState,
    settings: Settings,
    scores: Scoreboard,
    persistence: Persistence,
    scheduler: TurnScheduler,
    rng: ChaCha8Rng,
    generation: u64,
    hint: Option<Position>,
}

impl GameController {
    /// Creates a controller, loading scores and settings from `persistence`.
    ///
    /// `seed` makes the computer's random choices reproducible.
    #[instrument(skip(persistence))]
    pub fn new(
        persistence: Persistence,
        ai_delay: Duration,
        seed: Option<u64>,
    ) -> (Self, mpsc::UnboundedReceiver<ControllerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let seed = seed.unwrap_or_else(rand::random);
        let settings = persistence.load_settings();
        let scores = persistence.load_scores();
        info!(?settings, ?scores, seed, "Creating GameController");

        let controller = Self {
            state: GameState::new(),
            settings,
            scores,
            persistence,
            scheduler: TurnScheduler::new(ai_delay, tx),
            rng: ChaCha8Rng::seed_from_u64(seed),
            generation: 0,
            hint: None,
        };
        (controller, rx)
    }

    /// Returns the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the scoreboard.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Returns the highlighted hint, if any.
    pub fn hint(&self) -> Option<Position> {
        self.hint
    }

    /// Returns the current game generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true while the computer's move is pending.
    pub fn is_thinking(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Returns true when the computer should play next.
    pub fn is_computer_turn(&self) -> bool {
        self.settings.mode.has_computer()
            && !self.state.phase().is_over()
            && self.state.turn() != HUMAN_PLAYER
    }

    /// Plays a human move.
    ///
    /// Rejected while the computer is thinking or when it is the
    /// computer's turn.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, pos: Position) -> Result<Phase, MoveError> {
        if self.is_thinking() || self.is_computer_turn() {
            debug!("Human input suppressed");
            return Err(MoveError::NotYourTurn(self.state.turn()));
        }
        self.apply(pos)
    }

    /// Handles an event from the turn scheduler.
    ///
    /// Returns the position the computer played, if it played.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: ControllerEvent) -> Option<Position> {
        match event {
            ControllerEvent::ComputerMoveDue { generation } => {
                if generation != self.generation || !self.scheduler.complete(generation) {
                    debug!(
                        generation,
                        current = self.generation,
                        "Discarding stale computer move"
                    );
                    return None;
                }
                self.play_computer_move()
            }
        }
    }

    fn play_computer_move(&mut self) -> Option<Position> {
        if !self.is_computer_turn() {
            return None;
        }
        let player = self.state.turn();
        let pos = choose_heuristic_move(self.state.board(), player, &mut self.rng)?;
        match self.apply(pos) {
            Ok(_) => {
                info!(%player, position = %pos, "Computer played");
                Some(pos)
            }
            Err(e) => {
                warn!(error = %e, "Computer move rejected");
                None
            }
        }
    }

    fn apply(&mut self, pos: Position) -> Result<Phase, MoveError> {
        let phase = self.state.play(pos)?;
        self.hint = None;

        if phase.is_over() {
            self.scores.record(phase);
            if let Err(e) = self.persistence.save_scores(&self.scores) {
                warn!(error = %e, "Failed to save scores");
            }
        } else if self.is_computer_turn() {
            self.scheduler.schedule(self.generation);
        }
        Ok(phase)
    }

    /// Starts a new game, cancelling any pending computer move.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.scheduler.cancel();
        self.generation += 1;
        self.state = GameState::new();
        self.hint = None;
        info!(generation = self.generation, "New game");

        if self.is_computer_turn() {
            self.scheduler.schedule(self.generation);
        }
    }

    /// Zeroes the scoreboard.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        if let Err(e) = self.persistence.save_scores(&self.scores) {
            warn!(error = %e, "Failed to save scores");
        }
    }

    /// Suggests a move for the player to move and remembers it.
    ///
    /// No hint once the game is over or while the computer is thinking.
    #[instrument(skip(self))]
    pub fn request_hint(&mut self) -> Option<Position> {
        if self.state.phase().is_over() || self.is_thinking() {
            return None;
        }
        self.hint = choose_heuristic_move(self.state.board(), self.state.turn(), &mut self.rng);
        debug!(hint = ?self.hint, "Hint computed");
        self.hint
    }

    /// Switches between light and dark.
    #[instrument(skip(self))]
    pub fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggle();
        self.save_settings();
    }

    /// Switches between emoji and letter marks.
    #[instrument(skip(self))]
    pub fn toggle_emojis(&mut self) {
        self.settings.use_emojis = !self.settings.use_emojis;
        self.save_settings();
    }

    /// Switches game mode and starts a new game.
    #[instrument(skip(self))]
    pub fn toggle_mode(&mut self) {
        self.set_mode(self.settings.mode.toggle());
    }

    /// Sets the game mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.settings.mode = mode;
        self.save_settings();
        self.new_game();
    }

    fn save_settings(&self) {
        if let Err(e) = self.persistence.save_settings(&self.settings) {
            warn!(error = %e, "Failed to save settings");
        }
    }

    /// Renders a mark in the configured style.
    pub fn mark(&self, player: Player) -> &'static str {
        match (self.settings.use_emojis, player) {
            (true, Player::X) => "❌",
            (true, Player::O) => "⭕",
            (false, Player::X) => "X",
            (false, Player::O) => "O",
        }
    }

    /// One-line description of the game for the status bar.
    pub fn status_text(&self) -> String {
        let turn = self.state.turn();
        match self.state.phase() {
            Phase::Won { winner, .. } => format!("{} wins!", self.mark(winner)),
            Phase::Draw => "It's a draw!".to_string(),
            Phase::InProgress if self.is_thinking() || self.is_computer_turn() => {
                format!("Computer ({}) is thinking…", self.mark(turn))
            }
            Phase::InProgress => format!("Player {}'s turn", self.mark(turn)),
        }
    }
}
