//! User-configurable settings: theme, mark style and game mode.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Colour theme for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Toggles between `Light` and `Dark`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Who plays O.
///
/// Defaults to [`GameMode::Pvp`]; in [`GameMode::PvcEasy`] the human is X
/// and the heuristic opponent is O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the keyboard.
    #[default]
    #[serde(rename = "PVP")]
    Pvp,
    /// Human against the heuristic opponent.
    #[serde(rename = "PVC_EASY")]
    PvcEasy,
}

impl GameMode {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pvp => "Player vs Player",
            Self::PvcEasy => "You vs Computer (Easy)",
        }
    }

    /// Toggles between `Pvp` and `PvcEasy`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Pvp => Self::PvcEasy,
            Self::PvcEasy => Self::Pvp,
        }
    }

    /// Returns true when the computer plays O.
    pub fn has_computer(self) -> bool {
        matches!(self, Self::PvcEasy)
    }
}

/// Persisted user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Colour theme.
    pub theme: Theme,
    /// Render marks as ❌/⭕ instead of X/O.
    pub use_emojis: bool,
    /// Game mode.
    pub mode: GameMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            use_emojis: true,
            mode: GameMode::default(),
        }
    }
}

impl Settings {
    /// Creates settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a stored record over the defaults, field by field.
    ///
    /// Missing fields, fields of the wrong type, and unknown fields all
    /// leave the default in place. A record that is not a JSON object
    /// yields plain defaults.
    #[instrument(skip(stored))]
    pub fn merged_over_defaults(stored: &serde_json::Value) -> Self {
        let mut settings = Self::default();
        let Some(fields) = stored.as_object() else {
            warn!("Stored settings are not an object, using defaults");
            return settings;
        };

        merge_field(fields, "theme", &mut settings.theme);
        merge_field(fields, "useEmojis", &mut settings.use_emojis);
        merge_field(fields, "mode", &mut settings.mode);
        debug!(?settings, "Settings merged");
        settings
    }
}

fn merge_field<T: DeserializeOwned>(
    fields: &serde_json::Map<String, serde_json::Value>,
    name: &str,
    slot: &mut T,
) {
    let Some(raw) = fields.get(name) else {
        return;
    };
    match serde_json::from_value(raw.clone()) {
        Ok(value) => *slot = value,
        Err(e) => warn!(field = name, error = %e, "Ignoring invalid stored setting"),
    }
}
