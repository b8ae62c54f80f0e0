//! Default column widths inferred from column keys.

use crate::column::Column;

/// Width used when no pattern matches.
pub const FALLBACK_WIDTH: u16 = 16;

/// Ordered key patterns; the first pattern contained in the key wins.
const WIDTH_PATTERNS: &[(&[&str], u16)] = &[
    (&["date", "created", "updated", "time"], 20),
    (&["email"], 32),
    (&["name"], 24),
    (&["status", "type"], 14),
    (&["amount", "salary", "total"], 14),
    (&["id"], 8),
];

/// Infer a width in terminal cells from a column key.
pub fn infer_width(key: &str) -> u16 {
    let key = key.to_lowercase();
    WIDTH_PATTERNS
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|p| key.contains(p)))
        .map(|(_, width)| *width)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Effective width of a column: explicit width, else inferred, then clamped
/// to the column's min/max.
pub fn column_width<T>(column: &Column<T>) -> u16 {
    let mut width = column.width.unwrap_or_else(|| infer_width(&column.key));
    if let Some(min) = column.min_width {
        width = width.max(min);
    }
    if let Some(max) = column.max_width {
        width = width.min(max);
    }
    width
}
