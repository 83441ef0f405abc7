use expense_ledger::{
    core::LedgerManager,
    init,
    ledger::{Entry, EntryKind},
    storage::MemoryStorage,
};

#[test]
fn ledger_smoke() {
    init();

    let mut manager = LedgerManager::open(Box::new(MemoryStorage::new())).unwrap();
    let entry = Entry::parse("42", "Gift", "Other", "2025-01-01 10:00:00", "income").unwrap();
    manager.add_entry(entry).unwrap();

    assert_eq!(manager.len(), 1);
    assert_eq!(manager.list().next().unwrap().kind(), EntryKind::Income);
    assert_eq!(manager.summarize_by_month().len(), 1);
}
