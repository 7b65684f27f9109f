//! Flat key-value storage for the two persisted records.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Key of the scoreboard record.
pub const SCORES_KEY: &str = "tictac_scores_v1";

/// Key of the settings record.
pub const SETTINGS_KEY: &str = "tictac_settings_v1";

/// Durable string storage addressed by fixed keys.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Reads the value stored under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
