//! Settings backend trait.

use super::SettingsError;

/// Backend trait for settings storage.
///
/// Implementations store raw JSON values. The `SettingsProvider` wraps this
/// with typed serialization.
pub trait SettingsBackend: Send + Sync {
    /// Get the stored value for a key.
    fn get_value(&self, key: &str) -> Result<Option<serde_json::Value>, SettingsError>;

    /// Store a value for a key.
    fn set_value(&self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;

    /// Delete a key.
    fn delete(&self, key: &str) -> Result<(), SettingsError>;

    /// Get all keys matching a prefix.
    fn keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, SettingsError>;
}
