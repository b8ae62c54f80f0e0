//! In-memory settings backend.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::{SettingsBackend, SettingsError};

/// Settings held in memory only. Used for tests and `--no-config` runs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: RwLock<BTreeMap<String, serde_json::Value>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsBackend for MemoryBackend {
    fn get_value(&self, key: &str) -> Result<Option<serde_json::Value>, SettingsError> {
        let values = self.values.read().map_err(|_| SettingsError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set_value(&self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let mut values = self.values.write().map_err(|_| SettingsError::Poisoned)?;
        values.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), SettingsError> {
        let mut values = self.values.write().map_err(|_| SettingsError::Poisoned)?;
        values.remove(key);
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        let values = self.values.read().map_err(|_| SettingsError::Poisoned)?;
        Ok(values
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}
