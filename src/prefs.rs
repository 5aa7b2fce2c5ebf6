// SPDX-License-Identifier: MPL-2.0
//! Key-value preference storage.
//!
//! A small persistence surface for flags that do not belong in the typed
//! configuration, currently the theme choice under [`THEME_KEY`]. The store
//! is injected into the application root so UI code never touches the
//! filesystem directly, and tests can substitute [`MemoryPreferences`].

use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the persisted theme choice (`light`, `dark` or `system`).
pub const THEME_KEY: &str = "theme";

const PREFS_FILE: &str = "prefs.toml";
const APP_NAME: &str = "IcedVitrine";

/// Read/write access to string preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences persisted as a flat TOML table under the user config directory.
///
/// Loading is lenient: a missing or unparsable file yields an empty store
/// rather than an error, so a corrupted preference file never blocks startup.
#[derive(Debug, Default)]
pub struct FilePreferences {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Opens the store at the platform default location.
    ///
    /// When no config directory is available the store still works but
    /// `set` only updates the in-memory table.
    pub fn open_default() -> Self {
        let path = dirs::config_dir().map(|mut path| {
            path.push(APP_NAME);
            path.push(PREFS_FILE);
            path
        });
        Self::from_path(path)
    }

    /// Opens the store backed by a specific file (used by tests).
    pub fn open(path: &Path) -> Self {
        Self::from_path(Some(path.to_path_buf()))
    }

    fn from_path(path: Option<PathBuf>) -> Self {
        let values = path
            .as_deref()
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default();

        Self { path, values }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());

        if let Some(path) = &self.path {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = toml::to_string_pretty(&self.values)?;
            fs::write(path, content)?;
        }
        Ok(())
    }
}

/// Volatile store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_key_returns_none() {
        let store = MemoryPreferences::default();
        assert!(store.get(THEME_KEY).is_none());
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryPreferences::default();
        store.set(THEME_KEY, "dark").expect("set should not fail");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("prefs.toml");

        let mut store = FilePreferences::open(&path);
        store.set(THEME_KEY, "light").expect("set should not fail");

        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn file_store_overwrites_existing_value() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("prefs.toml");

        let mut store = FilePreferences::open(&path);
        store.set(THEME_KEY, "light").expect("set should not fail");
        store.set(THEME_KEY, "dark").expect("set should not fail");

        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn unparsable_file_yields_empty_store() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("prefs.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write file");

        let store = FilePreferences::open(&path);
        assert!(store.get(THEME_KEY).is_none());
    }
}
