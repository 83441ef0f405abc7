use std::sync::{
    atomic::{AtomicBool, Ordering},
    RwLock,
};

use crate::{
    errors::{LedgerError, Result},
    ledger::Entry,
};

use super::{decode_entries, encode_entries, LoadReport, StorageBackend};

/// Keeps the serialized document in memory. Useful for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: RwLock<Option<String>>,
    fail_saves: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RwLock::new(Some(document.into())),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Current serialized contents, if anything was stored.
    pub fn document(&self) -> Option<String> {
        self.document.read().ok().and_then(|guard| guard.clone())
    }

    /// Makes subsequent saves fail, simulating a full disk.
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl StorageBackend for MemoryStorage {
    fn load(&self) -> Result<LoadReport> {
        Ok(self
            .document()
            .map(|data| decode_entries(&data))
            .unwrap_or_default())
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(LedgerError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "memory store rejected write",
            )));
        }
        let json = encode_entries(entries)?;
        let mut guard = self.document.write().map_err(|_| {
            LedgerError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "store lock poisoned",
            ))
        })?;
        *guard = Some(json);
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::EntryKind;

    #[test]
    fn empty_store_loads_nothing() {
        let store = MemoryStorage::new();
        assert!(store.load().unwrap().entries.is_empty());
        assert!(store.document().is_none());
    }

    #[test]
    fn saved_document_is_reloaded() {
        let store = MemoryStorage::new();
        let entry = Entry::new(7.0, "Bus", "Transport", "2025-04-01", EntryKind::Expense).unwrap();
        store.save(std::slice::from_ref(&entry)).unwrap();
        assert_eq!(store.load().unwrap().entries, vec![entry]);
    }

    #[test]
    fn failing_store_reports_error() {
        let store = MemoryStorage::new();
        store.set_fail_saves(true);
        assert!(store.save(&[]).is_err());
    }
}
