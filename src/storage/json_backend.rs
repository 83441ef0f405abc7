use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use crate::{
    core::utils::ensure_dir,
    errors::Result,
    ledger::{magnitude, parse_date, Entry, EntryKind},
};

use super::{LoadReport, StorageBackend};

const TMP_SUFFIX: &str = "tmp";

/// On-disk shape of a single entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredEntry {
    pub amount: f64,
    pub description: String,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub transaction_type: EntryKind,
}

impl From<&Entry> for StoredEntry {
    fn from(entry: &Entry) -> Self {
        Self {
            amount: entry.amount(),
            description: entry.description().to_string(),
            date: entry.date_text(),
            category: entry.category().to_string(),
            transaction_type: entry.kind(),
        }
    }
}

impl TryFrom<StoredEntry> for Entry {
    type Error = crate::errors::LedgerError;

    fn try_from(record: StoredEntry) -> Result<Self> {
        let date = parse_date(&record.date)?;
        Entry::new(
            magnitude(record.amount)?,
            record.description,
            record.category,
            date,
            record.transaction_type,
        )
    }
}

/// Flat JSON file holding the whole entry sequence as an array of records.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<LoadReport> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no ledger file yet, starting empty");
                return Ok(LoadReport::empty());
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ledger file unreadable, starting empty");
                return Ok(LoadReport {
                    discarded: Some(format!("could not read {}: {err}", self.path.display())),
                    ..LoadReport::default()
                });
            }
        };
        let report = decode_entries(&data);
        tracing::info!(
            path = %self.path.display(),
            entries = report.entries.len(),
            skipped = report.warnings.len(),
            "ledger loaded"
        );
        Ok(report)
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        let json = encode_entries(entries)?;
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let tmp = tmp_path(&self.path);
        let written = write_atomic(&tmp, &json)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(Into::into));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        tracing::info!(path = %self.path.display(), entries = entries.len(), "ledger saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Serializes entries to the pretty-printed array-of-records format.
pub fn encode_entries(entries: &[Entry]) -> Result<String> {
    let records: Vec<StoredEntry> = entries.iter().map(StoredEntry::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Decodes a stored document. A document that is not a JSON array is treated as empty;
/// individual records that fail to decode are skipped and reported as warnings.
pub fn decode_entries(data: &str) -> LoadReport {
    if data.trim().is_empty() {
        return LoadReport::empty();
    }
    let values: Vec<serde_json::Value> = match serde_json::from_str(data) {
        Ok(values) => values,
        Err(err) => {
            tracing::warn!(error = %err, "ledger file is corrupt, starting empty");
            return LoadReport {
                discarded: Some(format!("ledger file is corrupt: {err}")),
                ..LoadReport::default()
            };
        }
    };

    let mut report = LoadReport::empty();
    for (index, value) in values.into_iter().enumerate() {
        let decoded = serde_json::from_value::<StoredEntry>(value)
            .map_err(crate::errors::LedgerError::from)
            .and_then(Entry::try_from);
        match decoded {
            Ok(entry) => report.entries.push(entry),
            Err(err) => {
                tracing::warn!(record = index, error = %err, "skipping stored record");
                report
                    .warnings
                    .push(format!("record {index} skipped: {err}"));
            }
        }
    }
    report
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
