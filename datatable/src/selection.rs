//! Selection tracking.
//!
//! The selection is a host-owned list of records. Membership is decided by
//! [`DataItem::id`], never by position, because positions move under
//! filtering, sorting and paging. Every operation here returns the new list
//! for the host to store.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::content::CheckState;
use crate::events::Callback;
use crate::item::DataItem;

/// Selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No selection allowed.
    #[default]
    None,
    /// One record at a time (radio-button style).
    Single,
    /// Any number of records (checkbox style), with select-all.
    Multiple,
}

/// Host selection state and change callback.
pub struct SelectionConfig<T: DataItem> {
    pub mode: SelectionMode,
    pub selected: Vec<T>,
    pub(crate) on_change: Option<Callback<Vec<T>>>,
}

impl<T: DataItem> Default for SelectionConfig<T> {
    fn default() -> Self {
        Self {
            mode: SelectionMode::None,
            selected: Vec::new(),
            on_change: None,
        }
    }
}

impl<T: DataItem> fmt::Debug for SelectionConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<_> = self.selected.iter().map(DataItem::id).collect();
        f.debug_struct("SelectionConfig")
            .field("mode", &self.mode)
            .field("selected", &ids)
            .finish_non_exhaustive()
    }
}

impl<T: DataItem> SelectionConfig<T> {
    pub fn single(selected: Vec<T>, on_change: impl Fn(Vec<T>) + Send + Sync + 'static) -> Self {
        Self {
            mode: SelectionMode::Single,
            selected,
            on_change: Some(Arc::new(on_change)),
        }
    }

    pub fn multiple(selected: Vec<T>, on_change: impl Fn(Vec<T>) + Send + Sync + 'static) -> Self {
        Self {
            mode: SelectionMode::Multiple,
            selected,
            on_change: Some(Arc::new(on_change)),
        }
    }

    pub fn is_selected(&self, item: &T) -> bool {
        is_selected(&self.selected, item)
    }
}

/// Ids of the selected records.
pub fn selected_ids<T: DataItem>(selected: &[T]) -> HashSet<T::Id> {
    selected.iter().map(DataItem::id).collect()
}

/// Whether `item` is in the selection, by id.
pub fn is_selected<T: DataItem>(selected: &[T], item: &T) -> bool {
    let id = item.id();
    selected.iter().any(|s| s.id() == id)
}

/// Selection after clicking `item`'s checkbox.
///
/// Single mode replaces the selection, or clears it when `item` was the
/// selected record. Multiple mode flips membership. Returns `None` when
/// selection is disabled.
pub fn toggle<T: DataItem>(mode: SelectionMode, selected: &[T], item: &T) -> Option<Vec<T>> {
    let id = item.id();
    let was_selected = selected.iter().any(|s| s.id() == id);
    match mode {
        SelectionMode::None => None,
        SelectionMode::Single => {
            if was_selected {
                Some(Vec::new())
            } else {
                Some(vec![item.clone()])
            }
        }
        SelectionMode::Multiple => {
            if was_selected {
                Some(selected.iter().filter(|s| s.id() != id).cloned().collect())
            } else {
                let mut next = selected.to_vec();
                next.push(item.clone());
                Some(next)
            }
        }
    }
}

/// Header checkbox state for the rows in `window`.
pub fn header_state<'a, T, I>(selected: &[T], window: I) -> CheckState
where
    T: DataItem,
    I: IntoIterator<Item = &'a T>,
{
    let ids = selected_ids(selected);
    let (mut total, mut hit) = (0usize, 0usize);
    for item in window {
        total += 1;
        if ids.contains(&item.id()) {
            hit += 1;
        }
    }
    if hit == 0 {
        CheckState::Unchecked
    } else if hit == total {
        CheckState::Checked
    } else {
        CheckState::Indeterminate
    }
}

/// Selection after clicking the header checkbox.
///
/// Only rows in `window` are affected. When all of them are selected they
/// are removed; otherwise the missing ones are appended in window order.
pub fn toggle_all<'a, T, I>(selected: &[T], window: I) -> Vec<T>
where
    T: DataItem,
    I: IntoIterator<Item = &'a T>,
{
    let window: Vec<&T> = window.into_iter().collect();
    let ids = selected_ids(selected);
    let all_selected = !window.is_empty() && window.iter().all(|item| ids.contains(&item.id()));

    if all_selected {
        let window_ids: HashSet<T::Id> = window.iter().map(|item| item.id()).collect();
        return selected
            .iter()
            .filter(|s| !window_ids.contains(&s.id()))
            .cloned()
            .collect();
    }

    let mut next = selected.to_vec();
    next.extend(
        window
            .into_iter()
            .filter(|item| !ids.contains(&item.id()))
            .cloned(),
    );
    next
}
