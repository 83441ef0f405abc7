#![allow(dead_code)]

use std::path::PathBuf;

use expense_ledger::{core::LedgerManager, storage::JsonStorage};
use tempfile::TempDir;

/// Manager backed by a JSON file in a fresh temp dir. Keep the guard alive.
pub fn setup_json_manager() -> (LedgerManager, PathBuf, TempDir) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("transaction.json");
    let manager =
        LedgerManager::open(Box::new(JsonStorage::new(&path))).expect("open ledger manager");
    (manager, path, temp)
}

/// Reopens the same file the way a new process would.
pub fn reopen(path: &PathBuf) -> LedgerManager {
    LedgerManager::open(Box::new(JsonStorage::new(path))).expect("reopen ledger manager")
}
