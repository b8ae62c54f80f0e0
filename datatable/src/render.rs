//! Cell and header rendering.
//!
//! A column's own renderer always wins. Without one, cells are formatted by
//! the variant of their [`FieldValue`], in a fixed order: null, bool,
//! number, text, everything else.

use crate::column::Column;
use crate::content::{Content, Tone};
use crate::item::DataItem;
use crate::sort::{self, SortConfig};
use crate::value::FieldValue;

/// Character budget for text cells.
pub const TEXT_LIMIT: usize = 50;

/// Character budget for stringified objects and lists.
pub const OTHER_LIMIT: usize = 30;

/// Glyph shown for missing values.
pub const PLACEHOLDER: &str = "—";

const ELLIPSIS: char = '…';

/// Content for one cell.
pub fn cell<T: DataItem>(column: &Column<T>, item: &T, index: usize) -> Content {
    let value = column.value(item);
    match column.cell_renderer() {
        Some(render) => render.render(&value, item, index),
        None => default_cell(&value),
    }
}

/// Default formatting for a value with no column renderer.
pub fn default_cell(value: &FieldValue) -> Content {
    match value {
        FieldValue::Null => Content::Placeholder(PLACEHOLDER.to_string()),
        FieldValue::Bool(true) => Content::badge("Yes", Tone::Success),
        FieldValue::Bool(false) => Content::badge("No", Tone::Muted),
        FieldValue::Int(v) => Content::text(group_digits(*v)),
        FieldValue::Float(v) => Content::text(format_float(*v)),
        FieldValue::Text(s) => truncated(s, TEXT_LIMIT),
        FieldValue::Other(v) => truncated(&v.to_string(), OTHER_LIMIT),
    }
}

/// Header content: the column's header renderer, or label plus sort glyph.
pub fn header<T>(column: &Column<T>, sort: Option<&SortConfig>) -> Content {
    if let Some(render) = column.header_renderer() {
        return render.render(column, sort);
    }
    if column.sortable {
        Content::Group(vec![
            Content::text(column.label.clone()),
            Content::toned(sort::indicator(sort, &column.key), Tone::Muted),
        ])
    } else {
        Content::text(column.label.clone())
    }
}

/// Text cut to `limit` characters plus an ellipsis, with the full value as
/// the tooltip when anything was cut.
pub fn truncated(s: &str, limit: usize) -> Content {
    match truncate_chars(s, limit) {
        Some(short) => Content::Text {
            text: short,
            title: Some(s.to_string()),
            tone: Tone::Default,
        },
        None => Content::text(s),
    }
}

/// First `limit` characters plus an ellipsis, or `None` when `s` fits.
pub fn truncate_chars(s: &str, limit: usize) -> Option<String> {
    let mut chars = s.char_indices();
    let (cut, _) = chars.nth(limit)?;
    let mut short = s[..cut].to_string();
    short.push(ELLIPSIS);
    Some(short)
}

/// Integer with thousands separators: `1234567` → `1,234,567`.
pub fn group_digits(v: i64) -> String {
    let grouped = group_str(&v.unsigned_abs().to_string());
    if v < 0 { format!("-{grouped}") } else { grouped }
}

/// Float with thousands separators and at most three fraction digits.
pub fn format_float(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let fixed = format!("{:.3}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if v < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_str(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_str(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
