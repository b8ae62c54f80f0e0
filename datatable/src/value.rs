//! Field values read out of records.
//!
//! Every cell starts life as a [`FieldValue`]. The default cell formatter,
//! the search filter and the host-side sort helper all dispatch on its
//! variant instead of inspecting the record type.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// A dynamic value held by one field of a record.
///
/// # Type Mapping
///
/// | Source value | Variant |
/// |--------------|---------|
/// | missing / null | `Null` |
/// | boolean | `Bool` |
/// | integer | `Int` |
/// | floating point | `Float` |
/// | string, date-like string | `Text` |
/// | object, list | `Other` |
///
/// # Example
///
/// ```
/// use datatable::FieldValue;
///
/// let name = FieldValue::from("Ada");
/// let hours = FieldValue::from(7.5);
/// let approved = FieldValue::from(true);
/// let missing = FieldValue::Null;
/// assert!(hours.is_number());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Missing or null value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text, including date-like strings.
    Text(String),
    /// Nested objects, lists and anything else.
    Other(serde_json::Value),
}

impl FieldValue {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Returns `true` for both integer and floating point values.
    pub fn is_number(&self) -> bool {
        matches!(self, FieldValue::Int(_) | FieldValue::Float(_))
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::Text(_) => "text",
            FieldValue::Other(_) => "other",
        }
    }

    /// Returns the text if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// String form used by the search filter.
    ///
    /// Null becomes the empty string so it never matches a non-empty query.
    /// Numbers are written without digit grouping.
    pub fn search_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(v) => v.to_string(),
            FieldValue::Int(v) => v.to_string(),
            FieldValue::Float(v) => v.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Other(v) => v.to_string(),
        }
    }

    /// Convert back into a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(v) => serde_json::Value::Bool(*v),
            FieldValue::Int(v) => serde_json::Value::from(*v),
            FieldValue::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Other(v) => v.clone(),
        }
    }

    /// Total ordering used when a host sorts records by a column.
    ///
    /// Values of different kinds order as null < bool < number < text < other.
    /// Text compares case-insensitively first.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (FieldValue::Other(a), FieldValue::Other(b)) => a.to_string().cmp(&b.to_string()),
            (a, b) if a.is_number() && b.is_number() => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => Ordering::Equal,
            },
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Int(_) | FieldValue::Float(_) => 2,
            FieldValue::Text(_) => 3,
            FieldValue::Other(_) => 4,
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(v) => FieldValue::Int(v),
            Err(_) => FieldValue::Float(v as f64),
        }
    }
}

impl From<usize> for FieldValue {
    fn from(v: usize) -> Self {
        FieldValue::from(v as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => n.as_f64().map(FieldValue::Float).unwrap_or(FieldValue::Null),
            },
            serde_json::Value::String(s) => FieldValue::Text(s),
            other => FieldValue::Other(other),
        }
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => FieldValue::Null,
        }
    }
}

// =============================================================================
// ToFieldValue
// =============================================================================

/// Borrowing conversion into a [`FieldValue`].
///
/// `#[derive(DataItem)]` calls this on every exposed field, so any field type
/// used in a derived record must implement it.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl<T: ToFieldValue + ?Sized> ToFieldValue for &T {
    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}

impl ToFieldValue for FieldValue {
    fn to_field_value(&self) -> FieldValue {
        self.clone()
    }
}

impl ToFieldValue for str {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.to_string())
    }
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }
}

macro_rules! int_field_value {
    ($($ty:ty),*) => {
        $(
            impl ToFieldValue for $ty {
                fn to_field_value(&self) -> FieldValue {
                    FieldValue::Int(i64::from(*self))
                }
            }
        )*
    };
}

int_field_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToFieldValue for u64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::from(*self)
    }
}

impl ToFieldValue for usize {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::from(*self)
    }
}

impl ToFieldValue for f32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(f64::from(*self))
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for serde_json::Value {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::from(self.clone())
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(inner) => inner.to_field_value(),
            None => FieldValue::Null,
        }
    }
}

impl<T: ToFieldValue> ToFieldValue for Vec<T> {
    fn to_field_value(&self) -> FieldValue {
        let items = self.iter().map(|v| v.to_field_value().to_json()).collect();
        FieldValue::Other(serde_json::Value::Array(items))
    }
}

impl ToFieldValue for NaiveDate {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.format("%Y-%m-%d").to_string())
    }
}

impl ToFieldValue for NaiveDateTime {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

impl<Tz: TimeZone> ToFieldValue for DateTime<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_numbers() {
        assert_eq!(FieldValue::from(serde_json::json!(42)), FieldValue::Int(42));
        assert_eq!(FieldValue::from(serde_json::json!(4.5)), FieldValue::Float(4.5));
    }

    #[test]
    fn test_from_json_nested_is_other() {
        let value = FieldValue::from(serde_json::json!({"a": 1}));
        assert_eq!(value.type_name(), "other");
        let list = FieldValue::from(serde_json::json!([1, 2]));
        assert_eq!(list.type_name(), "other");
    }

    #[test]
    fn test_search_text_null_is_empty() {
        assert_eq!(FieldValue::Null.search_text(), "");
        assert_eq!(FieldValue::Int(1200).search_text(), "1200");
    }

    #[test]
    fn test_compare_mixed_numbers() {
        assert_eq!(FieldValue::Int(2).compare(&FieldValue::Float(1.5)), Ordering::Greater);
        assert_eq!(FieldValue::Null.compare(&FieldValue::Int(0)), Ordering::Less);
    }

    #[test]
    fn test_compare_text_case_insensitive() {
        let a = FieldValue::from("alice");
        let b = FieldValue::from("Bob");
        assert_eq!(a.compare(&b), Ordering::Less);
    }

    #[test]
    fn test_dates_become_text() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(date.to_field_value(), FieldValue::from("2024-03-09"));
    }
}
