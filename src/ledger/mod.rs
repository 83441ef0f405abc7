//! Ledger domain models: entries and the in-memory collection that owns them.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{
    magnitude, parse_amount, parse_date, DateInput, Entry, EntryKind, NormalizedLabel,
    DATE_FORMAT, DATE_TIME_FORMAT, MONTH_FORMAT,
};
pub use ledger::Ledger;
