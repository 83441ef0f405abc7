use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".expense_ledger";
const CONFIG_FILE: &str = "config.json";
pub const DEFAULT_LEDGER_FILE: &str = "transaction.json";

pub const HOME_ENV: &str = "EXPENSE_LEDGER_HOME";
pub const LEDGER_FILE_ENV: &str = "EXPENSE_LEDGER_FILE";

/// Resolves application paths, honouring `EXPENSE_LEDGER_HOME`.
pub struct PathResolver;

impl PathResolver {
    /// Returns the application data directory, defaulting to `~/.expense_ledger`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }

    /// Relative ledger names live in the base directory; absolute paths are kept as-is.
    pub fn ledger_file_in(base: &Path, name: &str) -> PathBuf {
        let candidate = PathBuf::from(name);
        if candidate.is_absolute() {
            candidate
        } else {
            base.join(candidate)
        }
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_ledger_names_join_the_base() {
        let base = PathBuf::from("/data/ledger");
        assert_eq!(
            PathResolver::ledger_file_in(&base, "transaction.json"),
            base.join("transaction.json")
        );
    }

    #[test]
    fn absolute_ledger_paths_are_kept() {
        let base = PathBuf::from("/data/ledger");
        let absolute = env::temp_dir().join("elsewhere.json");
        assert_eq!(
            PathResolver::ledger_file_in(&base, absolute.to_str().unwrap()),
            absolute
        );
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
