//! Tictac library - terminal tic-tac-toe around the `tictac_rules` engine
//!
//! # Architecture
//!
//! - **Game**: explicit state machine (`GameState` + `Phase`) calling the
//!   rules engine on every move
//! - **Controller**: scoring, settings, hints and the deferred computer turn
//! - **Persistence**: scoreboard and settings records in a key-value store
//! - **TUI**: ratatui front end
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use tictac::{GameController, MemoryStore, Persistence};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let persistence = Persistence::new(MemoryStore::new());
//! let (controller, events) = GameController::new(persistence, Duration::from_millis(300), None);
//! tictac::run_tui(controller, events).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod game;
mod notation;
mod persistence;
mod scheduler;
mod scores;
mod settings;
mod storage;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DATA_DIR_ENV};

// Crate-level exports - Game state machine
pub use controller::{GameController, HUMAN_PLAYER};
pub use game::{GameState, MoveError, Phase};
pub use scheduler::{ControllerEvent, TurnScheduler};

// Crate-level exports - Persistence
pub use persistence::Persistence;
pub use scores::Scoreboard;
pub use settings::{GameMode, Settings, Theme};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SCORES_KEY, SETTINGS_KEY, StorageError};

// Crate-level exports - Text notation
pub use notation::{ParseBoardError, format_board, parse_board};

// Crate-level exports - Terminal UI
pub use tui::{KeyAction, key_action, move_cursor, run_tui};

// Crate-level exports - Rules engine
pub use tictac_rules::{
    Board, Evaluation, Line, MoveReason, Player, Position, Square, choose_heuristic_move,
    empty_cells, evaluate_board, explain_heuristic_move,
};
