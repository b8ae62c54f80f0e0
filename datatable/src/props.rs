//! Per-render inputs from the host.

use std::fmt;
use std::sync::Arc;

use crate::actions::RowActions;
use crate::column::ColumnSet;
use crate::display_state::DisplayOptions;
use crate::events::{RowCallback, SortCallback};
use crate::item::DataItem;
use crate::pagination::PaginationConfig;
use crate::search::SearchConfig;
use crate::selection::SelectionConfig;
use crate::sort::{SortConfig, SortDirection};
use crate::view::{Labels, TableStyle};

/// Everything the host passes in for one render.
///
/// Props are rebuilt by the host on every state change. The table never
/// mutates them; it reports intents through the callbacks they carry.
///
/// ```ignore
/// let props = TableProps::new(records.clone(), columns.clone())
///     .search(SearchConfig::new(Search::controlled(query, on_search)).keys(["email"]))
///     .pagination(PaginationConfig::new(page, 20, records.len(), on_page)?)
///     .sort(sort, on_sort)
///     .selection(SelectionConfig::multiple(selected, on_select));
/// ```
pub struct TableProps<T: DataItem> {
    pub(crate) records: Arc<[T]>,
    pub(crate) columns: ColumnSet<T>,
    pub(crate) pagination: Option<PaginationConfig>,
    pub(crate) sort: Option<SortConfig>,
    pub(crate) on_sort: Option<SortCallback>,
    pub(crate) search: SearchConfig,
    pub(crate) selection: SelectionConfig<T>,
    pub(crate) actions: Option<RowActions<T>>,
    pub(crate) display: DisplayOptions,
    pub(crate) style: TableStyle,
    pub(crate) labels: Labels,
    pub(crate) on_row_click: Option<RowCallback<T>>,
    pub(crate) on_row_double_click: Option<RowCallback<T>>,
}

impl<T: DataItem> fmt::Debug for TableProps<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableProps")
            .field("records", &self.records.len())
            .field("columns", &self.columns)
            .field("pagination", &self.pagination)
            .field("sort", &self.sort)
            .field("search", &self.search)
            .field("selection", &self.selection)
            .field("actions", &self.actions)
            .field("display", &self.display)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl<T: DataItem> TableProps<T> {
    pub fn new(records: impl Into<Arc<[T]>>, columns: ColumnSet<T>) -> Self {
        Self {
            records: records.into(),
            columns,
            pagination: None,
            sort: None,
            on_sort: None,
            search: SearchConfig::default(),
            selection: SelectionConfig::default(),
            actions: None,
            display: DisplayOptions::default(),
            style: TableStyle::default(),
            labels: Labels::default(),
            on_row_click: None,
            on_row_double_click: None,
        }
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Current sort (for the header indicators) and the sort-request callback.
    pub fn sort(
        mut self,
        current: Option<SortConfig>,
        on_sort: impl Fn(&str, SortDirection) + Send + Sync + 'static,
    ) -> Self {
        self.sort = current;
        self.on_sort = Some(Arc::new(on_sort));
        self
    }

    pub fn search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn selection(mut self, selection: SelectionConfig<T>) -> Self {
        self.selection = selection;
        self
    }

    pub fn actions(mut self, actions: RowActions<T>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.display.loading = loading;
        self
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.display.error = error;
        self
    }

    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.display.loading_message = message.into();
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.display.empty_message = message.into();
        self
    }

    /// Replace all display options, including state overrides.
    pub fn display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn on_row_click(mut self, f: impl Fn(&T, usize) + Send + Sync + 'static) -> Self {
        self.on_row_click = Some(Arc::new(f));
        self
    }

    pub fn on_row_double_click(mut self, f: impl Fn(&T, usize) + Send + Sync + 'static) -> Self {
        self.on_row_double_click = Some(Arc::new(f));
        self
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn columns(&self) -> &ColumnSet<T> {
        &self.columns
    }

    /// Fields searched this render: explicit keys, else filterable columns.
    pub fn search_keys(&self) -> Vec<String> {
        if self.search.keys.is_empty() {
            self.columns.filterable_keys()
        } else {
            self.search.keys.clone()
        }
    }
}
