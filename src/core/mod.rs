//! Ledger orchestration: the persisted ledger manager and reporting services.

pub mod ledger_manager;
pub mod services;
pub mod utils;

pub use ledger_manager::LedgerManager;
