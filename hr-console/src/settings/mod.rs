//! Settings system for typed key-value storage.

mod backend;
mod file;
mod memory;

pub use backend::SettingsBackend;
pub use file::JsonFileBackend;
pub use memory::MemoryBackend;

use std::sync::Arc;

use datatable::TableStyle;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use simplelog::LevelFilter;
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(serde_json::Error),
    #[error("deserialization error: {0}")]
    Deserialization(serde_json::Error),
    #[error("settings lock poisoned")]
    Poisoned,
}

/// Typed settings provider.
///
/// Wraps a `SettingsBackend` with typed serialization via serde_json.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    /// Create a new settings provider with the given backend.
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Get a typed value for a key.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_value(key)? {
            Some(value) => Ok(Some(
                serde_json::from_value(value).map_err(SettingsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, returning a default if not found.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> Result<T, SettingsError> {
        Ok(self.get(key)?.unwrap_or(default))
    }

    /// Set a typed value for a key.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let value = serde_json::to_value(value).map_err(SettingsError::Serialization)?;
        self.backend.set_value(key, value)
    }

    /// Delete a key.
    pub fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.delete(key)
    }

    /// Get all keys matching a prefix.
    pub fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        self.backend.keys_with_prefix(prefix)
    }
}

// =============================================================================
// Console settings
// =============================================================================

const TABLE_PREFIX: &str = "table.";

pub const PAGE_SIZE_KEY: &str = "table.page_size";
pub const PAGE_SIZE_OPTIONS_KEY: &str = "table.page_size_options";
pub const STYLE_KEY: &str = "table.style";
pub const LOG_LEVEL_KEY: &str = "log.level";

/// Table style flags as stored in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub striped: bool,
    pub bordered: bool,
    pub compact: bool,
    pub show_row_numbers: bool,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            striped: true,
            bordered: false,
            compact: false,
            show_row_numbers: false,
        }
    }
}

impl From<StyleSettings> for TableStyle {
    fn from(style: StyleSettings) -> Self {
        TableStyle {
            striped: style.striped,
            bordered: style.bordered,
            compact: style.compact,
            show_row_numbers: style.show_row_numbers,
            ..TableStyle::default()
        }
    }
}

/// Everything the console reads from settings at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub style: StyleSettings,
    pub log_level: LevelFilter,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: datatable::pagination::DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            style: StyleSettings::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl ConsoleSettings {
    /// Read settings, falling back to defaults for missing keys.
    ///
    /// An unknown log level falls back to the default rather than failing.
    pub fn load(provider: &SettingsProvider) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let log_level = provider
            .get::<String>(LOG_LEVEL_KEY)?
            .and_then(|level| level.parse().ok())
            .unwrap_or(defaults.log_level);
        Ok(Self {
            page_size: provider
                .get_or(PAGE_SIZE_KEY, defaults.page_size)?
                .max(1),
            page_size_options: provider.get_or(PAGE_SIZE_OPTIONS_KEY, defaults.page_size_options)?,
            style: provider.get_or(STYLE_KEY, defaults.style)?,
            log_level,
        })
    }

    /// Write these settings back.
    pub fn save(&self, provider: &SettingsProvider) -> Result<(), SettingsError> {
        provider.set(PAGE_SIZE_KEY, &self.page_size)?;
        provider.set(PAGE_SIZE_OPTIONS_KEY, &self.page_size_options)?;
        provider.set(STYLE_KEY, &self.style)?;
        provider.set(LOG_LEVEL_KEY, &self.log_level.to_string())
    }

    /// Remove every stored table setting. Returns how many keys were removed.
    pub fn reset_table(provider: &SettingsProvider) -> Result<usize, SettingsError> {
        let keys = provider.keys_with_prefix(TABLE_PREFIX)?;
        for key in &keys {
            provider.delete(key)?;
        }
        Ok(keys.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> SettingsProvider {
        SettingsProvider::new(MemoryBackend::new())
    }

    #[test]
    fn test_typed_round_trip() {
        let settings = provider();
        settings.set("answer", &42u32).unwrap();
        assert_eq!(settings.get::<u32>("answer").unwrap(), Some(42));
        assert_eq!(settings.get_or("missing", 7u32).unwrap(), 7);
    }

    #[test]
    fn test_wrong_type_is_an_error() {
        let settings = provider();
        settings.set("answer", &"forty-two").unwrap();
        assert!(matches!(
            settings.get::<u32>("answer"),
            Err(SettingsError::Deserialization(_))
        ));
    }

    #[test]
    fn test_prefix_and_delete() {
        let settings = provider();
        settings.set("table.page_size", &20).unwrap();
        settings.set("table.style", &StyleSettings::default()).unwrap();
        settings.set("log.level", &"debug").unwrap();

        let mut keys = settings.keys_with_prefix("table.").unwrap();
        keys.sort();
        assert_eq!(keys, vec!["table.page_size", "table.style"]);

        settings.delete("table.style").unwrap();
        assert_eq!(settings.keys_with_prefix("table.").unwrap().len(), 1);
    }

    #[test]
    fn test_console_settings_defaults() {
        let loaded = ConsoleSettings::load(&provider()).unwrap();
        assert_eq!(loaded, ConsoleSettings::default());
    }

    #[test]
    fn test_console_settings_saved_and_loaded() {
        let settings = provider();
        let custom = ConsoleSettings {
            page_size: 25,
            page_size_options: vec![25, 50],
            style: StyleSettings {
                bordered: true,
                ..StyleSettings::default()
            },
            log_level: LevelFilter::Debug,
        };
        custom.save(&settings).unwrap();
        assert_eq!(ConsoleSettings::load(&settings).unwrap(), custom);
    }

    #[test]
    fn test_reset_table_keeps_log_level() {
        let settings = provider();
        let custom = ConsoleSettings {
            page_size: 50,
            log_level: LevelFilter::Warn,
            ..ConsoleSettings::default()
        };
        custom.save(&settings).unwrap();

        assert_eq!(ConsoleSettings::reset_table(&settings).unwrap(), 3);
        let loaded = ConsoleSettings::load(&settings).unwrap();
        assert_eq!(loaded.page_size, 10);
        assert_eq!(loaded.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_partial_style_uses_defaults() {
        let settings = provider();
        settings
            .set(STYLE_KEY, &serde_json::json!({"compact": true}))
            .unwrap();
        let loaded = ConsoleSettings::load(&settings).unwrap();
        assert!(loaded.style.compact);
        assert!(loaded.style.striped);
    }
}
