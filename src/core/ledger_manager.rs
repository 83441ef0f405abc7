use crate::{
    core::services::{CategoryTotal, MonthSummary, SummaryService},
    errors::Result,
    ledger::{DateInput, Entry, EntryKind, Ledger},
    storage::StorageBackend,
};

/// Owns the in-memory ledger and keeps its backing store in sync after every mutation.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    load_warnings: Vec<String>,
}

impl LedgerManager {
    /// Loads whatever the store holds. A missing or corrupt store starts empty.
    /// Records that fail to decode are dropped and listed in `load_warnings`;
    /// they are gone from the store after the next save.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self> {
        let report = storage.load()?;
        if let Some(reason) = &report.discarded {
            tracing::debug!(store = %storage.location(), "{reason}");
        }
        for warning in &report.warnings {
            tracing::warn!(store = %storage.location(), "{warning}");
        }
        Ok(Self {
            ledger: Ledger::from_entries(report.entries),
            storage,
            load_warnings: report.warnings,
        })
    }

    /// Builds, appends, and persists a new entry. Identical entries are allowed.
    pub fn add(
        &mut self,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<DateInput>,
        kind: EntryKind,
    ) -> Result<&Entry> {
        let entry = Entry::new(amount, description, category, date, kind)?;
        self.add_entry(entry)
    }

    pub fn add_entry(&mut self, entry: Entry) -> Result<&Entry> {
        tracing::debug!(description = entry.description(), kind = %entry.kind(), "adding entry");
        self.ledger.push(entry);
        if let Err(err) = self.persist() {
            self.ledger.pop();
            return Err(err);
        }
        let index = self.ledger.len() - 1;
        Ok(&self.ledger.entries()[index])
    }

    /// Removes the first entry whose description matches, ignoring case and
    /// surrounding whitespace. `Ok(None)` means nothing matched and nothing was written.
    pub fn remove(&mut self, description: &str) -> Result<Option<Entry>> {
        let Some((index, removed)) = self.ledger.remove_first_matching(description) else {
            tracing::debug!(description, "no entry matched for removal");
            return Ok(None);
        };
        if let Err(err) = self.persist() {
            self.ledger.restore_at(index, removed);
            return Err(err);
        }
        tracing::debug!(description = removed.description(), "entry removed");
        Ok(Some(removed))
    }

    pub fn balance(&self) -> f64 {
        SummaryService::balance(&self.ledger)
    }

    /// Entries in insertion order. Each call starts a fresh pass.
    pub fn list(&self) -> std::slice::Iter<'_, Entry> {
        self.ledger.iter()
    }

    pub fn summarize_by_category(&self) -> Vec<CategoryTotal> {
        SummaryService::by_category(&self.ledger)
    }

    pub fn summarize_by_month(&self) -> Vec<MonthSummary> {
        SummaryService::by_month(&self.ledger)
    }

    /// Rewrites the store with the full current sequence.
    pub fn save(&self) -> Result<()> {
        self.persist()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    /// Records skipped while loading the store.
    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    pub fn location(&self) -> String {
        self.storage.location()
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(self.ledger.entries())
    }
}
