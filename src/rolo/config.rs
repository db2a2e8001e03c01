use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.json";
const DEFAULT_NOTES_FILE: &str = "notes.json";
const DEFAULT_BIRTHDAY_WINDOW: i64 = 7;
const DEFAULT_STARTUP_WINDOW: i64 = 30;

/// Configuration for rolo, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoloConfig {
    /// File holding the address book
    #[serde(default = "default_contacts_file")]
    pub contacts_file: String,

    /// File holding notes, tags and their links
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// Look-ahead for the `birthday` command when no depth is entered
    #[serde(default = "default_birthday_window")]
    pub birthday_window_days: i64,

    /// Look-ahead for the reminder printed at startup
    #[serde(default = "default_startup_window")]
    pub startup_birthday_days: i64,
}

fn default_contacts_file() -> String {
    DEFAULT_CONTACTS_FILE.to_string()
}

fn default_notes_file() -> String {
    DEFAULT_NOTES_FILE.to_string()
}

fn default_birthday_window() -> i64 {
    DEFAULT_BIRTHDAY_WINDOW
}

fn default_startup_window() -> i64 {
    DEFAULT_STARTUP_WINDOW
}

impl Default for RoloConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            notes_file: default_notes_file(),
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW,
            startup_birthday_days: DEFAULT_STARTUP_WINDOW,
        }
    }
}

impl RoloConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RoloConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RoloConfig::default();
        assert_eq!(config.contacts_file, "contacts.json");
        assert_eq!(config.notes_file, "notes.json");
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.startup_birthday_days, 30);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = RoloConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, RoloConfig::default());
    }

    #[test]
    fn test_load_written_config() {
        let dir = TempDir::new().unwrap();
        let config = RoloConfig {
            birthday_window_days: 14,
            ..RoloConfig::default()
        };
        let content = serde_json::to_string_pretty(&config).unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), content).unwrap();

        let loaded = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"notes_file": "n.json"}"#).unwrap();

        let loaded = RoloConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.notes_file, "n.json");
        assert_eq!(loaded.contacts_file, "contacts.json");
        assert_eq!(loaded.startup_birthday_days, 30);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(RoloConfig::load(dir.path()).is_err());
    }
}
