//! Output of one render.
//!
//! A [`TableView`] is a plain description of what to show. It holds no
//! callbacks and no references to the host's records, so front ends can
//! keep it, diff it or print it.

use crate::column::Align;
use crate::content::{CheckState, Content};
use crate::display_state::DisplayState;
use crate::pagination::{PageControl, PageSummary};
use crate::sort::SortDirection;

/// Presentation flags passed through to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    pub striped: bool,
    pub hoverable: bool,
    pub bordered: bool,
    pub compact: bool,
    pub sticky_header: bool,
    pub show_row_numbers: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            striped: false,
            hoverable: true,
            bordered: false,
            compact: false,
            sticky_header: false,
            show_row_numbers: false,
        }
    }
}

/// Accessibility labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub caption: Option<String>,
    pub search: String,
    pub select_all: String,
    pub select_row: String,
    pub actions: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            caption: None,
            search: "Search".to_string(),
            select_all: "Select all rows".to_string(),
            select_row: "Select row".to_string(),
            actions: "Actions".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub value: String,
    pub placeholder: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCellView {
    pub key: String,
    pub content: Content,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
    pub align: Align,
    pub width: u16,
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub key: String,
    pub content: Content,
    pub align: Align,
    pub width: u16,
    pub class_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    /// Position within the current window.
    pub index: usize,
    /// One-based position across all pages.
    pub number: usize,
    /// Record id, as text.
    pub id: String,
    pub selected: bool,
    /// Selection checkbox, when selection is enabled.
    pub checkbox: Option<Content>,
    pub cells: Vec<CellView>,
    pub actions: Option<Content>,
    /// Odd row under a striped style.
    pub striped: bool,
}

/// Table body: rows, or one placeholder replacing them.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    Rows(Vec<RowView>),
    Placeholder {
        state: DisplayState,
        content: Content,
    },
}

impl BodyView {
    pub fn state(&self) -> DisplayState {
        match self {
            BodyView::Rows(_) => DisplayState::Populated,
            BodyView::Placeholder { state, .. } => *state,
        }
    }

    pub fn rows(&self) -> &[RowView] {
        match self {
            BodyView::Rows(rows) => rows,
            BodyView::Placeholder { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationView {
    pub controls: Vec<PageControl>,
    pub summary: PageSummary,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// Page-size choices; empty when the selector is off.
    pub page_size_options: Vec<usize>,
}

/// Everything a front end needs to draw the table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub caption: Option<String>,
    pub search: Option<SearchView>,
    /// Header checkbox (multi-select only).
    pub select_all: Option<Content>,
    pub header: Vec<HeaderCellView>,
    /// Header of the actions column, when rows have actions.
    pub actions_header: Option<String>,
    pub body: BodyView,
    pub pagination: Option<PaginationView>,
    pub style: TableStyle,
    /// Rows matching the search, across all pages.
    pub filtered_count: usize,
    pub selection_enabled: bool,
}

impl TableView {
    pub fn state(&self) -> DisplayState {
        self.body.state()
    }

    pub fn rows(&self) -> &[RowView] {
        self.body.rows()
    }

    /// Header checkbox state, if shown.
    pub fn select_all_state(&self) -> Option<CheckState> {
        match &self.select_all {
            Some(Content::Checkbox { state, .. }) => Some(*state),
            _ => None,
        }
    }
}
