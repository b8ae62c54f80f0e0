//! Records displayed by the table.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::value::FieldValue;

/// Trait for records that can be displayed as rows of a data table.
///
/// Selection identity is by [`DataItem::id`]: two values with the same id are
/// the same record, whatever their other fields hold.
///
/// Implement by hand, or use `#[derive(DataItem)]`:
///
/// ```ignore
/// #[derive(Clone, DataItem)]
/// struct Employee {
///     id: u32,
///     name: String,
///     #[data(rename = "email")]
///     work_email: String,
/// }
/// ```
pub trait DataItem: Clone + Send + Sync + 'static {
    /// The identifier type.
    type Id: Clone + Eq + Hash + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Unique identifier for this record.
    fn id(&self) -> Self::Id;

    /// Look up a field by key.
    ///
    /// Unknown keys return [`FieldValue::Null`].
    fn field(&self, key: &str) -> FieldValue;
}

/// Record identifier that is either an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(RecordId::Int),
            serde_json::Value::String(s) if !s.is_empty() => Some(RecordId::Text(s.clone())),
            _ => None,
        }
    }

    fn to_field_value(&self) -> FieldValue {
        match self {
            RecordId::Int(v) => FieldValue::Int(*v),
            RecordId::Text(s) => FieldValue::Text(s.clone()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(v) => write!(f, "{v}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId::Int(v)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId::Text(v.to_string())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        RecordId::Text(v)
    }
}

/// A record backed by a JSON object, for data whose shape is only known at
/// runtime.
///
/// Field keys may be dotted paths (`employee.name`) into nested objects.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord {
    id: RecordId,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonRecord {
    /// Build a record from a JSON object. `index` is only used for errors.
    pub fn from_value(index: usize, value: serde_json::Value) -> Result<Self, TableError> {
        let serde_json::Value::Object(fields) = value else {
            return Err(TableError::NotAnObject { index });
        };
        let id = fields
            .get("id")
            .and_then(RecordId::from_json)
            .ok_or(TableError::MissingRecordId { index })?;
        Ok(Self { id, fields })
    }

    /// Build records from a list of JSON objects, rejecting duplicate ids.
    pub fn from_values(values: Vec<serde_json::Value>) -> Result<Vec<Self>, TableError> {
        let mut seen = HashSet::with_capacity(values.len());
        let mut records = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            let record = Self::from_value(index, value)?;
            if !seen.insert(record.id.clone()) {
                return Err(TableError::DuplicateRecordId {
                    index,
                    id: record.id.to_string(),
                });
            }
            records.push(record);
        }
        Ok(records)
    }

    /// Parse a JSON array of record objects.
    pub fn parse_array(json: &str) -> Result<Vec<Self>, TableError> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        Self::from_values(values)
    }

    /// Raw JSON value at a (possibly dotted) key.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        if let Some(value) = self.fields.get(key) {
            return Some(value);
        }
        let mut parts = key.split('.');
        let first = parts.next()?;
        parts.try_fold(self.fields.get(first)?, |value, part| value.get(part))
    }

    /// The underlying JSON object.
    pub fn fields(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.fields
    }

    /// Replace a top-level field. The id is fixed at load, so `id` is
    /// refused and `false` returned.
    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) -> bool {
        let key = key.into();
        if key == "id" {
            return false;
        }
        self.fields.insert(key, value);
        true
    }
}

impl DataItem for JsonRecord {
    type Id = RecordId;

    fn id(&self) -> RecordId {
        self.id.clone()
    }

    fn field(&self, key: &str) -> FieldValue {
        if key == "id" {
            return self.id.to_field_value();
        }
        self.get(key).cloned().map(FieldValue::from).unwrap_or_default()
    }
}
