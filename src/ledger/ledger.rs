use super::entry::{Entry, EntryKind, NormalizedLabel};

/// In-memory, insertion-ordered collection of entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Removes the first entry whose normalized description equals `description`.
    /// Returns the removed entry and its former position.
    pub fn remove_first_matching(&mut self, description: &str) -> Option<(usize, Entry)> {
        let key = NormalizedLabel::new(description);
        let index = self
            .entries
            .iter()
            .position(|entry| entry.normalized_description() == key)?;
        Some((index, self.entries.remove(index)))
    }

    /// Puts an entry back where it was, used to undo a removal.
    pub fn restore_at(&mut self, index: usize, entry: Entry) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
    }

    /// Drops the most recently pushed entry.
    pub fn pop(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    /// Lazily walks entries in insertion order; call again to restart.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self, kind: EntryKind) -> f64 {
        self.entries
            .iter()
            .filter(|entry| entry.kind() == kind)
            .map(Entry::amount)
            .sum()
    }

    /// Total income minus total expense. Empty ledgers balance to zero.
    pub fn balance(&self) -> f64 {
        self.total(EntryKind::Income) - self.total(EntryKind::Expense)
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
