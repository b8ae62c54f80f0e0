//! The data table: render and dispatch.

use std::ops::Range;
use std::sync::Arc;

use log::{debug, trace};

use crate::actions::RowActions;
use crate::column::ColumnSet;
use crate::content::{CheckState, Content};
use crate::display_state::{self, DisplayState};
use crate::events::{EventResult, TableEvent};
use crate::filter;
use crate::item::DataItem;
use crate::memo::{Memo, MemoStats};
use crate::pagination;
use crate::props::TableProps;
use crate::render;
use crate::search::LocalSearch;
use crate::selection::{self, SelectionMode};
use crate::sort::{self, SortConfig};
use crate::view::{
    BodyView, CellView, HeaderCellView, PaginationView, RowView, SearchView, TableView,
};
use crate::width;

/// Cache key for the filtered index list: record and column identity plus
/// the search inputs.
struct FilterKey<T> {
    records: Arc<[T]>,
    columns: ColumnSet<T>,
    query: String,
    keys: Vec<String>,
}

impl<T> PartialEq for FilterKey<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
            && self.columns.same_as(&other.columns)
            && self.query == other.query
            && self.keys == other.keys
    }
}

struct WidthKey<T>(ColumnSet<T>);

impl<T> PartialEq for WidthKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.same_as(&other.0)
    }
}

/// A data table instance.
///
/// The instance outlives individual renders but holds no authoritative
/// state: only the text of an uncontrolled search box and caches of derived
/// views. Everything else arrives through [`TableProps`] on each call.
///
/// ```ignore
/// let mut table = DataTable::new();
/// let view = table.render(&props);
/// table.dispatch(&props, TableEvent::HeaderClick("name".into()));
/// ```
pub struct DataTable<T: DataItem> {
    search: LocalSearch,
    filtered: Memo<FilterKey<T>, Arc<[usize]>>,
    widths: Memo<WidthKey<T>, Arc<[u16]>>,
}

impl<T: DataItem> Default for DataTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DataItem> DataTable<T> {
    pub fn new() -> Self {
        Self {
            search: LocalSearch::default(),
            filtered: Memo::new("filtered"),
            widths: Memo::new("widths"),
        }
    }

    /// Search text in effect for these props.
    pub fn search_value<'a>(&'a self, props: &'a TableProps<T>) -> &'a str {
        self.search.current(&props.search.mode)
    }

    /// Indices into `props.records` of rows matching the search.
    pub fn filtered_indices(&mut self, props: &TableProps<T>) -> Arc<[usize]> {
        let key = FilterKey {
            records: Arc::clone(&props.records),
            columns: props.columns.clone(),
            query: self.search_value(props).to_string(),
            keys: props.search_keys(),
        };
        let columns = &props.columns;
        let records = &props.records;
        let (query, keys) = (key.query.clone(), key.keys.clone());
        self.filtered.get_or_compute(key, || {
            filter::filter_indices(records, &query, &keys, |record, key| match columns.get(key) {
                Some(column) => column.value(record),
                None => record.field(key),
            })
            .into()
        })
    }

    /// Display width of each column, in column order.
    pub fn column_widths(&mut self, props: &TableProps<T>) -> Arc<[u16]> {
        let columns = &props.columns;
        self.widths.get_or_compute(WidthKey(columns.clone()), || {
            columns.iter().map(width::column_width).collect()
        })
    }

    /// Rows on the current page, in display order.
    pub fn window<'p>(&mut self, props: &'p TableProps<T>) -> Vec<&'p T> {
        let filtered = self.filtered_indices(props);
        let range = window_range(props, filtered.len());
        filtered[range]
            .iter()
            .map(|&index| &props.records[index])
            .collect()
    }

    /// Cache counters for the filtered rows and the column widths.
    pub fn memo_stats(&self) -> (MemoStats, MemoStats) {
        (self.filtered.stats(), self.widths.stats())
    }

    /// Compute the view for these props.
    pub fn render(&mut self, props: &TableProps<T>) -> TableView {
        let filtered = self.filtered_indices(props);
        let widths = self.column_widths(props);
        let state = display_state::resolve(
            props.display.loading,
            props.display.error.as_deref(),
            filtered.len(),
        );
        let range = window_range(props, filtered.len());
        let offset = range.start;
        let window: Vec<&T> = filtered[range]
            .iter()
            .map(|&index| &props.records[index])
            .collect();

        trace!(
            "render: {} records, {} match, {} on page, state {:?}",
            props.records.len(),
            filtered.len(),
            window.len(),
            state
        );

        let header = props
            .columns
            .iter()
            .zip(widths.iter())
            .map(|(column, &width)| HeaderCellView {
                key: column.key.clone(),
                content: render::header(column, props.sort.as_ref()),
                sortable: column.sortable,
                sort: column
                    .sortable
                    .then(|| sort::direction_for(props.sort.as_ref(), &column.key))
                    .flatten(),
                align: column.align,
                width,
                class_name: column.header_class_name.clone(),
            })
            .collect();

        let mode = props.selection.mode;
        let select_all = (mode == SelectionMode::Multiple).then(|| Content::Checkbox {
            state: selection::header_state(&props.selection.selected, window.iter().copied()),
            label: props.labels.select_all.clone(),
        });

        let body = match props.display.placeholder(state) {
            Some(content) => BodyView::Placeholder { state, content },
            None => BodyView::Rows(self.rows(props, &window, offset, &widths)),
        };

        let search = props.search.mode.is_enabled().then(|| SearchView {
            value: self.search_value(props).to_string(),
            placeholder: props.search.placeholder.clone(),
            label: props.labels.search.clone(),
        });

        let pagination = props
            .pagination
            .as_ref()
            .filter(|config| config.total_pages() > 1)
            .map(|config| PaginationView {
                controls: config.controls(),
                summary: config.summary(),
                current_page: config.active_page(),
                total_pages: config.total_pages(),
                page_size: config.page_size(),
                page_size_options: config.selector_options(),
            });

        TableView {
            caption: props.labels.caption.clone(),
            search,
            select_all,
            header,
            actions_header: props.actions.as_ref().map(|_| props.labels.actions.clone()),
            body,
            pagination,
            style: props.style,
            filtered_count: filtered.len(),
            selection_enabled: mode != SelectionMode::None,
        }
    }

    fn rows(
        &self,
        props: &TableProps<T>,
        window: &[&T],
        offset: usize,
        widths: &[u16],
    ) -> Vec<RowView> {
        let selected = selection::selected_ids(&props.selection.selected);
        let checkboxes = props.selection.mode != SelectionMode::None;

        window
            .iter()
            .enumerate()
            .map(|(index, &item)| {
                let id = item.id();
                let is_selected = selected.contains(&id);
                let cells = props
                    .columns
                    .iter()
                    .zip(widths)
                    .map(|(column, &width)| CellView {
                        key: column.key.clone(),
                        content: render::cell(column, item, index),
                        align: column.align,
                        width,
                        class_name: column.class_name.clone(),
                    })
                    .collect();
                RowView {
                    index,
                    number: offset + index + 1,
                    id: id.to_string(),
                    selected: is_selected,
                    checkbox: checkboxes.then(|| Content::Checkbox {
                        state: if is_selected {
                            CheckState::Checked
                        } else {
                            CheckState::Unchecked
                        },
                        label: format!("{} {}", props.labels.select_row, id),
                    }),
                    cells,
                    actions: props.actions.as_ref().map(|actions| actions.render(item, index)),
                    striped: props.style.striped && index % 2 == 1,
                }
            })
            .collect()
    }

    /// Handle a user interaction by invoking the matching host callback.
    pub fn dispatch(&mut self, props: &TableProps<T>, event: TableEvent) -> EventResult {
        let result = match event {
            TableEvent::SearchInput(value) => {
                if self.search.edit(&props.search.mode, value) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            TableEvent::HeaderClick(key) => self.header_click(props, &key),
            TableEvent::PageClick(page) => self.page_click(props, page),
            TableEvent::PreviousPage => match &props.pagination {
                Some(config) if config.active_page() > 1 => {
                    self.page_click(props, config.active_page() - 1)
                }
                _ => EventResult::Ignored,
            },
            TableEvent::NextPage => match &props.pagination {
                Some(config) if config.active_page() < config.total_pages() => {
                    self.page_click(props, config.active_page() + 1)
                }
                _ => EventResult::Ignored,
            },
            TableEvent::PageSizeChange(size) => self.page_size_change(props, size),
            TableEvent::RowClick(index) => {
                match (self.row_at(props, index), &props.on_row_click) {
                    (Some(item), Some(on_click)) => {
                        on_click(item, index);
                        EventResult::Consumed
                    }
                    _ => EventResult::Ignored,
                }
            }
            TableEvent::RowDoubleClick(index) => {
                match (self.row_at(props, index), &props.on_row_double_click) {
                    (Some(item), Some(on_click)) => {
                        on_click(item, index);
                        EventResult::Consumed
                    }
                    _ => EventResult::Ignored,
                }
            }
            TableEvent::RowCheckbox(index) => self.row_checkbox(props, index),
            TableEvent::HeaderCheckbox => self.header_checkbox(props),
            TableEvent::ActionClick { row, action } => self.action_click(props, row, action),
        };
        if result == EventResult::Ignored {
            debug!("table event ignored");
        }
        result
    }

    fn header_click(&self, props: &TableProps<T>, key: &str) -> EventResult {
        let sortable = props.columns.get(key).is_some_and(|c| c.sortable);
        let Some(on_sort) = props.on_sort.as_ref().filter(|_| sortable) else {
            return EventResult::Ignored;
        };
        let next = SortConfig::next(props.sort.as_ref(), key);
        debug!("sort requested: {} {}", next.key, next.direction);
        on_sort(&next.key, next.direction);
        EventResult::Consumed
    }

    fn page_click(&self, props: &TableProps<T>, page: usize) -> EventResult {
        let Some(config) = &props.pagination else {
            return EventResult::Ignored;
        };
        if page == 0 || page > config.total_pages() || page == config.active_page() {
            return EventResult::Ignored;
        }
        debug!("page change requested: {page}");
        (config.on_page_change)(page);
        EventResult::Consumed
    }

    fn page_size_change(&self, props: &TableProps<T>, size: usize) -> EventResult {
        let Some(config) = &props.pagination else {
            return EventResult::Ignored;
        };
        match &config.on_page_size_change {
            Some(on_change) if size > 0 && size != config.page_size() => {
                debug!("page size change requested: {size}");
                on_change(size);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn row_checkbox(&mut self, props: &TableProps<T>, index: usize) -> EventResult {
        let Some(item) = self.row_at(props, index) else {
            return EventResult::Ignored;
        };
        let Some(on_change) = &props.selection.on_change else {
            return EventResult::Ignored;
        };
        match selection::toggle(props.selection.mode, &props.selection.selected, item) {
            Some(next) => {
                debug!("selection changed: {} selected", next.len());
                on_change(next);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn header_checkbox(&mut self, props: &TableProps<T>) -> EventResult {
        if props.selection.mode != SelectionMode::Multiple
            || self.body_state(props) != DisplayState::Populated
        {
            return EventResult::Ignored;
        }
        let Some(on_change) = props.selection.on_change.clone() else {
            return EventResult::Ignored;
        };
        let window = self.window(props);
        let next = selection::toggle_all(&props.selection.selected, window);
        debug!("select-all toggled: {} selected", next.len());
        on_change(next);
        EventResult::Consumed
    }

    fn action_click(&mut self, props: &TableProps<T>, row: usize, action: usize) -> EventResult {
        let Some(RowActions::Buttons(actions)) = &props.actions else {
            return EventResult::Ignored;
        };
        let (Some(item), Some(action)) = (self.row_at(props, row), actions.get(action)) else {
            return EventResult::Ignored;
        };
        if action.is_disabled(item) {
            return EventResult::Ignored;
        }
        debug!("row action '{}' on {}", action.label, item.id());
        (action.on_click)(item, row);
        EventResult::Consumed
    }

    fn body_state(&mut self, props: &TableProps<T>) -> DisplayState {
        let filtered = self.filtered_indices(props);
        display_state::resolve(
            props.display.loading,
            props.display.error.as_deref(),
            filtered.len(),
        )
    }

    /// Record shown at `index` of the current window, if rows are shown.
    fn row_at<'p>(&mut self, props: &'p TableProps<T>, index: usize) -> Option<&'p T> {
        if self.body_state(props) != DisplayState::Populated {
            return None;
        }
        self.window(props).get(index).copied()
    }
}

fn window_range<T: DataItem>(props: &TableProps<T>, filtered_len: usize) -> Range<usize> {
    match &props.pagination {
        Some(config) => {
            pagination::window_range(filtered_len, config.current_page(), config.page_size())
        }
        None => 0..filtered_len,
    }
}
