//! Sort coordination.
//!
//! The table never reorders rows. It shows the host's current sort on the
//! headers and, when a sortable header is clicked, works out the next
//! `(key, direction)` for the host to apply.

use std::fmt;
use std::str::FromStr;

use crate::item::DataItem;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header indicator glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

/// Glyph for a sortable column that is not the active sort.
pub const UNSORTED_GLYPH: &str = "↕";

/// The active sort, shared by all columns of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    pub fn asc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Next sort after a header click on `key`.
    ///
    /// Clicking the active column flips its direction. Clicking any other
    /// column starts it ascending.
    pub fn next(current: Option<&SortConfig>, key: &str) -> SortConfig {
        match current {
            Some(sort) if sort.key == key => SortConfig::new(key, sort.direction.toggled()),
            _ => SortConfig::asc(key),
        }
    }
}

/// Direction shown for `key` under the current sort, if it is the active column.
pub fn direction_for(current: Option<&SortConfig>, key: &str) -> Option<SortDirection> {
    current.filter(|s| s.key == key).map(|s| s.direction)
}

/// Indicator glyph for a sortable column.
pub fn indicator(current: Option<&SortConfig>, key: &str) -> &'static str {
    direction_for(current, key)
        .map(SortDirection::glyph)
        .unwrap_or(UNSORTED_GLYPH)
}

/// Sort records in place by a field, for hosts doing client-side sorting.
///
/// The sort is stable, so ties keep their previous order.
pub fn apply_sort<T: DataItem>(records: &mut [T], sort: &SortConfig) {
    records.sort_by(|a, b| {
        let ord = a.field(&sort.key).compare(&b.field(&sort.key));
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}
