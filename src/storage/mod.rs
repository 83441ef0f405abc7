pub mod json_backend;
pub mod memory;

use crate::{errors::Result, ledger::Entry};

/// Abstraction over persistence backends capable of storing a full entry sequence.
pub trait StorageBackend: Send + Sync {
    /// Reads the store. Missing or corrupt stores yield an empty report, never an error.
    fn load(&self) -> Result<LoadReport>;
    /// Overwrites the store with `entries`.
    fn save(&self, entries: &[Entry]) -> Result<()>;
    /// Human readable description of where entries live.
    fn location(&self) -> String;
}

/// Entries recovered from a store plus any records that had to be skipped.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub entries: Vec<Entry>,
    /// One line per stored record that could not be decoded.
    pub warnings: Vec<String>,
    /// Set when the whole document was unusable and the store starts empty.
    pub discarded: Option<String>,
}

impl LoadReport {
    pub fn empty() -> Self {
        Self::default()
    }
}

pub use json_backend::{decode_entries, encode_entries, JsonStorage, StoredEntry};
pub use memory::MemoryStorage;
