//! Loading and saving the scoreboard and settings records.

use crate::scores::Scoreboard;
use crate::settings::Settings;
use crate::storage::{KeyValueStore, SCORES_KEY, SETTINGS_KEY, StorageError};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Persistence layer over a [`KeyValueStore`].
///
/// Loads never fail: missing, unreadable, or corrupt records fall back to
/// defaults. Saves report errors so the caller can log them.
#[derive(Debug, Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
}

impl Persistence {
    /// Creates a persistence layer backed by the given store.
    #[instrument(skip(store))]
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        info!(?store, "Creating Persistence");
        Self {
            store: Arc::new(store),
        }
    }

    /// Loads the scoreboard, or zeroes if none is usable.
    #[instrument(skip(self))]
    pub fn load_scores(&self) -> Scoreboard {
        let Some(raw) = self.read(SCORES_KEY) else {
            return Scoreboard::default();
        };
        match serde_json::from_str::<Option<Scoreboard>>(&raw) {
            Ok(Some(scores)) => {
                debug!(?scores, "Scores loaded");
                scores
            }
            Ok(None) => Scoreboard::default(),
            Err(e) => {
                warn!(error = %e, "Stored scores are corrupt, starting from zero");
                Scoreboard::default()
            }
        }
    }

    /// Loads the settings merged over defaults.
    #[instrument(skip(self))]
    pub fn load_settings(&self) -> Settings {
        let Some(raw) = self.read(SETTINGS_KEY) else {
            return Settings::default();
        };
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => Settings::merged_over_defaults(&value),
            Err(e) => {
                warn!(error = %e, "Stored settings are corrupt, using defaults");
                Settings::default()
            }
        }
    }

    /// Saves the scoreboard.
    #[instrument(skip(self))]
    pub fn save_scores(&self, scores: &Scoreboard) -> Result<(), StorageError> {
        let json = serde_json::to_string(scores)?;
        self.store.set(SCORES_KEY, &json)
    }

    /// Saves the settings.
    #[instrument(skip(self))]
    pub fn save_settings(&self, settings: &Settings) -> Result<(), StorageError> {
        let json = serde_json::to_string(settings)?;
        self.store.set(SETTINGS_KEY, &json)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Could not read stored record, using defaults");
                None
            }
        }
    }
}
