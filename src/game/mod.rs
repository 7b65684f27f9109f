//! Game state machine built on the rules engine.

mod error;
mod state;

pub use error::MoveError;
pub use state::{GameState, Phase};
