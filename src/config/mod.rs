use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{ensure_dir, PathResolver, DEFAULT_LEDGER_FILE, LEDGER_FILE_ENV},
    errors::{LedgerError, Result},
};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// File name (relative to the app directory) or absolute path of the ledger store.
    pub ledger_file: String,
    pub plain_output: bool,
    pub confirm_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_file: DEFAULT_LEDGER_FILE.into(),
            plain_output: false,
            confirm_exit: true,
        }
    }
}

impl Config {
    /// Colour is off when configured so or when `NO_COLOR` is present.
    pub fn use_plain_output(&self) -> bool {
        self.plain_output || env::var_os("NO_COLOR").is_some()
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            LedgerError::Config(format!("{} is invalid: {err}", self.path.display()))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        ensure_dir(&self.base)?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let written = write_atomic(&tmp, &json)
            .and_then(|()| fs::rename(&tmp, &self.path).map_err(Into::into));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err);
        }
        Ok(())
    }

    /// Store location: `EXPENSE_LEDGER_FILE` wins over the configured file.
    pub fn ledger_path(&self, config: &Config) -> PathBuf {
        match env::var(LEDGER_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => PathResolver::ledger_file_in(&self.base, &config.ledger_file),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.ledger_file, "transaction.json");
    }

    #[test]
    fn config_roundtrip() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = Config {
            ledger_file: "household.json".into(),
            plain_output: true,
            confirm_exit: false,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn failed_save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::create_dir_all(manager.path()).unwrap();
        fs::write(manager.path().join("keep"), "x").unwrap();

        assert!(manager.save(&Config::default()).is_err());
        assert!(!tmp_path(manager.path()).exists());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"plain_output": true}"#).unwrap();
        let config = manager.load().unwrap();
        assert!(config.plain_output);
        assert!(config.confirm_exit);
        assert_eq!(config.ledger_file, DEFAULT_LEDGER_FILE);
    }

    #[test]
    fn invalid_config_is_reported() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "[1, 2").unwrap();
        assert!(matches!(manager.load(), Err(LedgerError::Config(_))));
    }
}
