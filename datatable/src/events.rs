//! Interaction events and host callbacks.
//!
//! The front end turns user input into a [`TableEvent`] and hands it to
//! [`crate::DataTable::dispatch`]. Dispatch never changes authoritative state;
//! it only invokes the matching host callback with the intent.

use std::sync::Arc;

use crate::sort::SortDirection;

/// Single-argument host callback.
pub type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Callback receiving a row and its index within the current window.
pub type RowCallback<T> = Arc<dyn Fn(&T, usize) + Send + Sync>;

/// Callback receiving the next sort request.
pub type SortCallback = Arc<dyn Fn(&str, SortDirection) + Send + Sync>;

/// A user interaction with the table.
///
/// Row indices are positions within the current window (the rows on screen),
/// not positions in the host's record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The search box text changed.
    SearchInput(String),
    /// A column header was clicked.
    HeaderClick(String),
    /// A page number was clicked.
    PageClick(usize),
    /// The previous-page button was clicked.
    PreviousPage,
    /// The next-page button was clicked.
    NextPage,
    /// A page size was picked.
    PageSizeChange(usize),
    /// A row body was clicked.
    RowClick(usize),
    /// A row body was double-clicked.
    RowDoubleClick(usize),
    /// A row's selection checkbox was clicked. Never counts as a row click.
    RowCheckbox(usize),
    /// The header select-all checkbox was clicked.
    HeaderCheckbox,
    /// A row action button was clicked.
    ActionClick { row: usize, action: usize },
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
