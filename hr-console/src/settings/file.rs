//! JSON file settings backend.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;

use super::{SettingsBackend, SettingsError};

/// Settings stored as one JSON object in a file.
///
/// The file is read once when opened and rewritten on every change.
#[derive(Debug)]
pub struct JsonFileBackend {
    path: PathBuf,
    values: Mutex<BTreeMap<String, serde_json::Value>>,
}

impl JsonFileBackend {
    /// Open the settings file at `path`. A missing file means no settings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(SettingsError::Deserialization)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(SettingsError::Io(e)),
        };
        debug!("opened settings file {}", path.display());
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, serde_json::Value>) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(values).map_err(SettingsError::Serialization)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl SettingsBackend for JsonFileBackend {
    fn get_value(&self, key: &str) -> Result<Option<serde_json::Value>, SettingsError> {
        let values = self.values.lock().map_err(|_| SettingsError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set_value(&self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        let mut values = self.values.lock().map_err(|_| SettingsError::Poisoned)?;
        values.insert(key.to_string(), value);
        self.persist(&values)
    }

    fn delete(&self, key: &str) -> Result<(), SettingsError> {
        let mut values = self.values.lock().map_err(|_| SettingsError::Poisoned)?;
        if values.remove(key).is_some() {
            self.persist(&values)?;
        }
        Ok(())
    }

    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError> {
        let values = self.values.lock().map_err(|_| SettingsError::Poisoned)?;
        Ok(values
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::open(dir.path().join("settings.json")).unwrap();
        assert_eq!(backend.get_value("table.page_size").unwrap(), None);
    }

    #[test]
    fn test_values_persist_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let backend = JsonFileBackend::open(&path).unwrap();
        backend
            .set_value("table.page_size", serde_json::json!(25))
            .unwrap();
        drop(backend);

        let reopened = JsonFileBackend::open(&path).unwrap();
        assert_eq!(
            reopened.get_value("table.page_size").unwrap(),
            Some(serde_json::json!(25))
        );
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            JsonFileBackend::open(&path),
            Err(SettingsError::Deserialization(_))
        ));
    }
}
