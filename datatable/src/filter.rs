//! Free-text search over record fields.

use crate::item::DataItem;
use crate::value::FieldValue;

/// Indices of records matching `query` on at least one of `keys`.
///
/// Matching is a case-insensitive substring test on
/// [`FieldValue::search_text`]. An empty query or empty key list keeps every
/// record. `lookup` reads a field from a record, which lets the table route
/// keys through typed column accessors.
pub fn filter_indices<T, F>(records: &[T], query: &str, keys: &[String], lookup: F) -> Vec<usize>
where
    F: Fn(&T, &str) -> FieldValue,
{
    if query.is_empty() || keys.is_empty() {
        return (0..records.len()).collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            keys.iter().any(|key| {
                lookup(record, key)
                    .search_text()
                    .to_lowercase()
                    .contains(&needle)
            })
        })
        .map(|(index, _)| index)
        .collect()
}

/// Records matching `query` on at least one of `keys`, read with
/// [`DataItem::field`]. The input slice is left untouched.
///
/// # Example
///
/// ```ignore
/// let hits = filter(&employees, "acme", &["email".to_string()]);
/// ```
pub fn filter<'a, T: DataItem>(records: &'a [T], query: &str, keys: &[String]) -> Vec<&'a T> {
    filter_indices(records, query, keys, |record, key| record.field(key))
        .into_iter()
        .map(|index| &records[index])
        .collect()
}
