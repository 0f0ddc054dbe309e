//! User preferences
//!
//! Display preferences persisted as JSON through the storage adapter.
//! Every field carries a serde default, so payloads written by older
//! versions still load; a corrupted payload falls back to defaults
//! rather than surfacing an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::{StorageAdapter, StorageError};

/// Storage key for the serialized preferences payload.
pub const PREFS_KEY: &str = "user_preferences";

// =============================================================================
// Preference Data
// =============================================================================

/// Color scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Display preferences for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    #[serde(default = "default_compact_numbers")]
    pub compact_numbers: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}
fn default_decimal_places() -> u32 {
    2
}
fn default_compact_numbers() -> bool {
    true
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            currency_symbol: default_currency_symbol(),
            decimal_places: default_decimal_places(),
            compact_numbers: default_compact_numbers(),
            date_format: default_date_format(),
        }
    }
}

// =============================================================================
// Preference Store
// =============================================================================

/// Load/save preferences through the injected adapter.
pub struct PreferencesStore {
    storage: Arc<dyn StorageAdapter>,
}

impl PreferencesStore {
    pub fn new(storage: Arc<dyn StorageAdapter>) -> Self {
        Self { storage }
    }

    /// Load preferences. A missing payload yields defaults; a payload
    /// that no longer parses is dropped and replaced by defaults.
    pub fn load(&self) -> Result<Preferences, StorageError> {
        match self.storage.get(PREFS_KEY)? {
            None => Ok(Preferences::default()),
            Some(payload) => match serde_json::from_str(&payload) {
                Ok(prefs) => Ok(prefs),
                Err(err) => {
                    warn!(%err, "discarding unreadable preferences payload");
                    Ok(Preferences::default())
                }
            },
        }
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), StorageError> {
        let payload = serde_json::to_string(prefs)?;
        self.storage.set(PREFS_KEY, &payload)
    }

    /// Flip the theme and persist the result.
    pub fn toggle_theme(&self) -> Result<ThemeMode, StorageError> {
        let mut prefs = self.load()?;
        prefs.theme = prefs.theme.toggled();
        self.save(&prefs)?;
        Ok(prefs.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> PreferencesStore {
        PreferencesStore::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_missing_payload_yields_defaults() {
        let prefs = store().load().unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.theme, ThemeMode::Dark);
        assert_eq!(prefs.currency_symbol, "₹");
    }

    #[test]
    fn test_save_and_reload() {
        let store = store();
        let mut prefs = Preferences::default();
        prefs.theme = ThemeMode::Light;
        prefs.compact_numbers = false;
        store.save(&prefs).unwrap();
        assert_eq!(store.load().unwrap(), prefs);
    }

    #[test]
    fn test_partial_payload_fills_defaults() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(PREFS_KEY, r#"{"theme":"light"}"#).unwrap();
        let prefs = PreferencesStore::new(storage).load().unwrap();
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.decimal_places, 2);
    }

    #[test]
    fn test_corrupted_payload_falls_back() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(PREFS_KEY, "{not json").unwrap();
        let prefs = PreferencesStore::new(storage).load().unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_toggle_theme_persists() {
        let store = store();
        assert_eq!(store.toggle_theme().unwrap(), ThemeMode::Light);
        assert_eq!(store.load().unwrap().theme, ThemeMode::Light);
        assert_eq!(store.toggle_theme().unwrap(), ThemeMode::Dark);
    }
}
