//! Configuration errors.
//!
//! Rendering itself never fails; these are raised when a column set,
//! pagination config or record batch is constructed with broken invariants.

/// Error type for table configuration and record loading.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Two columns in one table share a key.
    #[error("duplicate column key '{0}'")]
    DuplicateColumnKey(String),

    /// A column was declared with an empty key.
    #[error("column key must not be empty")]
    EmptyColumnKey,

    /// Page size must be at least one.
    #[error("invalid page size {0}: must be at least 1")]
    InvalidPageSize(usize),

    /// Pages are numbered from one.
    #[error("invalid page {0}: pages start at 1")]
    InvalidPage(usize),

    /// A record entry was not a JSON object.
    #[error("record {index} is not an object")]
    NotAnObject { index: usize },

    /// A record entry had no usable `id` field.
    #[error("record {index} has no usable 'id' (expected integer or string)")]
    MissingRecordId { index: usize },

    /// Two record entries share an id.
    #[error("record {index} repeats id '{id}'")]
    DuplicateRecordId { index: usize, id: String },

    /// The record batch was not valid JSON.
    #[error("invalid record json: {0}")]
    Json(#[from] serde_json::Error),
}
