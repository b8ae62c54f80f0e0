//! The host: owns table state and applies the table's intents to it.
//!
//! Each step builds fresh props from the current state, lets the table
//! dispatch one event, then drains the intents the callbacks queued and
//! applies them. The table itself never changes any of this state.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use datatable::bulk::BulkBarView;
use datatable::sort::apply_sort;
use datatable::text::TextLine;
use datatable::{
    BulkAction, BulkActionBar, ButtonVariant, ColumnSet, DataItem, DataTable, EventResult,
    JsonRecord, Labels, PaginationConfig, RecordId, Search, SearchConfig, SelectionConfig,
    SortConfig, SortDirection, TableEvent, TableProps, TextRenderer,
};
use log::{debug, info, warn};

use crate::error::ConsoleError;
use crate::screens::Screen;
use crate::settings::ConsoleSettings;

// =============================================================================
// Clicks
// =============================================================================

/// A scripted user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Click {
    Header(String),
    Page(usize),
    Previous,
    Next,
    PageSize(usize),
    Search(String),
    Row(usize),
    Open(usize),
    Toggle(usize),
    ToggleAll,
    Action { row: usize, action: usize },
    Bulk(usize),
}

impl FromStr for Click {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = s.split_once(':').unwrap_or((s, ""));
        let number = |arg: &str| {
            arg.parse::<usize>()
                .map_err(|_| format!("'{s}': expected a number after '{kind}:'"))
        };
        match kind {
            "header" if !arg.is_empty() => Ok(Click::Header(arg.to_string())),
            "page" => number(arg).map(Click::Page),
            "prev" => Ok(Click::Previous),
            "next" => Ok(Click::Next),
            "size" => number(arg).map(Click::PageSize),
            "search" => Ok(Click::Search(arg.to_string())),
            "row" => number(arg).map(Click::Row),
            "open" => number(arg).map(Click::Open),
            "toggle" => number(arg).map(Click::Toggle),
            "toggle-all" => Ok(Click::ToggleAll),
            "action" => {
                let (row, action) = arg
                    .split_once(':')
                    .ok_or_else(|| format!("'{s}': expected action:<row>:<n>"))?;
                Ok(Click::Action {
                    row: number(row)?,
                    action: number(action)?,
                })
            }
            "bulk" => number(arg).map(Click::Bulk),
            _ => Err(format!(
                "'{s}': expected header:<key>, page:<n>, prev, next, size:<n>, search:<text>, \
                 row:<i>, open:<i>, toggle:<i>, toggle-all, action:<row>:<n> or bulk:<n>"
            )),
        }
    }
}

impl Click {
    /// The table event for this click, or `None` for host-level clicks.
    fn event(&self) -> Option<TableEvent> {
        Some(match self {
            Click::Header(key) => TableEvent::HeaderClick(key.clone()),
            Click::Page(page) => TableEvent::PageClick(*page),
            Click::Previous => TableEvent::PreviousPage,
            Click::Next => TableEvent::NextPage,
            Click::PageSize(size) => TableEvent::PageSizeChange(*size),
            Click::Search(text) => TableEvent::SearchInput(text.clone()),
            Click::Row(row) => TableEvent::RowClick(*row),
            Click::Open(row) => TableEvent::RowDoubleClick(*row),
            Click::Toggle(row) => TableEvent::RowCheckbox(*row),
            Click::ToggleAll => TableEvent::HeaderCheckbox,
            Click::Action { row, action } => TableEvent::ActionClick {
                row: *row,
                action: *action,
            },
            Click::Bulk(_) => return None,
        })
    }
}

/// Parse `key[:asc|desc]`. A bare key sorts ascending.
pub fn parse_sort(s: &str) -> Result<SortConfig, String> {
    let (key, direction) = match s.split_once(':') {
        Some((key, direction)) => (key, direction.parse::<SortDirection>()?),
        None => (s, SortDirection::Asc),
    };
    if key.is_empty() {
        return Err(format!("'{s}': missing sort key"));
    }
    Ok(SortConfig::new(key, direction))
}

// =============================================================================
// Intents
// =============================================================================

/// Something the table or bulk bar asked the host to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Sort(SortConfig),
    Page(usize),
    PageSize(usize),
    Search(String),
    Select(Vec<JsonRecord>),
    Inspect(RecordId),
    Open(RecordId),
    Decide { label: String, id: RecordId },
    Export(Vec<RecordId>),
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Sort(sort) => write!(f, "sort by {} {}", sort.key, sort.direction),
            Intent::Page(page) => write!(f, "go to page {page}"),
            Intent::PageSize(size) => write!(f, "show {size} rows per page"),
            Intent::Search(query) => write!(f, "search for '{query}'"),
            Intent::Select(items) => write!(f, "select {} records", items.len()),
            Intent::Inspect(id) => write!(f, "inspect record {id}"),
            Intent::Open(id) => write!(f, "open record {id}"),
            Intent::Decide { label, id } => write!(f, "{} {id}", label.to_lowercase()),
            Intent::Export(ids) => write!(f, "export {} records", ids.len()),
        }
    }
}

type Outbox = Arc<Mutex<Vec<Intent>>>;

fn emit<A>(
    outbox: &Outbox,
    intent: impl Fn(A) -> Intent + Send + Sync + 'static,
) -> impl Fn(A) + Send + Sync + 'static {
    let outbox = Arc::clone(outbox);
    move |value| match outbox.lock() {
        Ok(mut queue) => queue.push(intent(value)),
        Err(_) => warn!("intent outbox poisoned; dropping intent"),
    }
}

// =============================================================================
// Console
// =============================================================================

/// Authoritative table state.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleState {
    pub query: String,
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<SortConfig>,
    pub selected: Vec<JsonRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Everything one render produces.
#[derive(Debug, Clone)]
pub struct Frame {
    pub lines: Vec<TextLine>,
    pub bulk: Option<BulkBarView>,
}

pub struct Console {
    screen: Screen,
    settings: ConsoleSettings,
    columns: ColumnSet<JsonRecord>,
    /// Records as loaded, in source order.
    source: Vec<JsonRecord>,
    /// Records in display order under the current sort.
    records: Arc<[JsonRecord]>,
    state: ConsoleState,
    table: DataTable<JsonRecord>,
    bulk: BulkActionBar<RecordId>,
    outbox: Outbox,
    history: Vec<String>,
}

impl Console {
    pub fn new(
        screen: Screen,
        records: Vec<JsonRecord>,
        settings: ConsoleSettings,
    ) -> Result<Self, ConsoleError> {
        let outbox: Outbox = Arc::default();
        let export = emit(&outbox, Intent::Export);
        let clear = emit(&outbox, Intent::Select);
        let bulk = BulkActionBar::new(vec![
            BulkAction::new("Export", move |ids: &[RecordId]| export(ids.to_vec()))
                .variant(ButtonVariant::Primary),
            BulkAction::new("Clear selection", move |_: &[RecordId]| clear(Vec::new()))
                .variant(ButtonVariant::Ghost),
        ]);
        let state = ConsoleState {
            query: String::new(),
            page: 1,
            page_size: settings.page_size,
            sort: screen.default_sort(),
            selected: Vec::new(),
            loading: false,
            error: None,
        };
        let mut console = Self {
            screen,
            columns: screen.columns()?,
            settings,
            records: Arc::from(Vec::new()),
            source: records,
            state,
            table: DataTable::new(),
            bulk,
            outbox,
            history: Vec::new(),
        };
        console.resort();
        Ok(console)
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ConsoleState {
        &mut self.state
    }

    /// Applied intents, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.state.sort = sort;
        self.resort();
    }

    /// Select records by id text, as given on the command line.
    pub fn select_ids(&mut self, ids: &[String]) -> Result<(), ConsoleError> {
        let mut selected = Vec::with_capacity(ids.len());
        for id in ids {
            let record = self
                .source
                .iter()
                .find(|r| r.id().to_string() == *id)
                .ok_or_else(|| ConsoleError::UnknownRecord(id.clone()))?;
            selected.push(record.clone());
        }
        self.state.selected = selected;
        Ok(())
    }

    fn search_keys(&self) -> Vec<String> {
        self.screen
            .search_keys()
            .iter()
            .map(|k| k.to_string())
            .collect()
    }

    /// Rows matching the current query, for the pagination total.
    fn filtered_total(&self) -> usize {
        datatable::filter::filter(&self.records[..], &self.state.query, &self.search_keys()).len()
    }

    fn resort(&mut self) {
        let mut sorted = self.source.clone();
        if let Some(sort) = &self.state.sort {
            apply_sort(&mut sorted, sort);
        }
        self.records = sorted.into();
    }

    /// Props for the current state, with callbacks feeding the outbox.
    pub fn props(&self) -> Result<TableProps<JsonRecord>, ConsoleError> {
        let outbox = &self.outbox;
        let pagination = PaginationConfig::new(
            self.state.page,
            self.state.page_size,
            self.filtered_total(),
            emit(outbox, Intent::Page),
        )?
        .on_page_size_change(emit(outbox, Intent::PageSize))
        .page_size_options(self.settings.page_size_options.clone());

        let on_sort = emit(outbox, Intent::Sort);
        let on_inspect = emit(outbox, Intent::Inspect);
        let on_open = emit(outbox, Intent::Open);
        let on_decide = emit(outbox, |(label, id): (String, RecordId)| Intent::Decide {
            label,
            id,
        });
        let on_decide = Arc::new(on_decide);

        let mut props = TableProps::new(Arc::clone(&self.records), self.columns.clone())
            .search(
                SearchConfig::new(Search::controlled(
                    self.state.query.clone(),
                    emit(outbox, Intent::Search),
                ))
                .keys(self.search_keys())
                .placeholder(format!("Search {}...", self.screen.title().to_lowercase())),
            )
            .pagination(pagination)
            .sort(self.state.sort.clone(), move |key: &str, direction| {
                on_sort(SortConfig::new(key, direction))
            })
            .selection(SelectionConfig::multiple(
                self.state.selected.clone(),
                emit(outbox, Intent::Select),
            ))
            .loading(self.state.loading)
            .error(self.state.error.clone())
            .loading_message(format!("Loading {}...", self.screen.title().to_lowercase()))
            .empty_message(format!("No {} found", self.screen.title().to_lowercase()))
            .style(self.settings.style.into())
            .labels(Labels {
                caption: Some(self.screen.title().to_string()),
                ..Labels::default()
            })
            .on_row_click(move |record: &JsonRecord, _| on_inspect(record.id()))
            .on_row_double_click(move |record: &JsonRecord, _| on_open(record.id()));

        let decide = move |label: &str, record: &JsonRecord| {
            on_decide((label.to_string(), record.id()))
        };
        if let Some(actions) = self.screen.actions(decide) {
            props = props.actions(actions);
        }
        Ok(props)
    }

    pub fn render(&mut self) -> Result<Frame, ConsoleError> {
        let props = self.props()?;
        let view = self.table.render(&props);
        let selected: Vec<RecordId> = self.state.selected.iter().map(DataItem::id).collect();
        Ok(Frame {
            lines: TextRenderer::new().render(&view),
            bulk: self.bulk.render(&selected),
        })
    }

    /// Dispatch one click and apply whatever it asked for.
    pub fn click(&mut self, click: &Click) -> Result<EventResult, ConsoleError> {
        let result = match click.event() {
            Some(event) => {
                let props = self.props()?;
                self.table.dispatch(&props, event)
            }
            None => {
                let Click::Bulk(index) = click else {
                    return Ok(EventResult::Ignored);
                };
                let selected: Vec<RecordId> =
                    self.state.selected.iter().map(DataItem::id).collect();
                self.bulk.click(*index, &selected)
            }
        };
        debug!("{click:?} -> {result:?}");
        self.apply_pending();
        Ok(result)
    }

    fn apply_pending(&mut self) {
        let intents = match self.outbox.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => {
                warn!("intent outbox poisoned; nothing applied");
                return;
            }
        };
        for intent in intents {
            info!("{intent}");
            self.history.push(intent.to_string());
            self.apply(intent);
        }
    }

    fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Sort(sort) => self.set_sort(Some(sort)),
            Intent::Page(page) => self.state.page = page,
            Intent::PageSize(size) => {
                self.state.page_size = size;
                self.state.page = 1;
            }
            Intent::Search(query) => {
                self.state.query = query;
                self.state.page = 1;
            }
            Intent::Select(items) => self.state.selected = items,
            Intent::Decide { label, id } => {
                let status = if label == "Approve" { "Approved" } else { "Rejected" };
                if let Some(record) = self.source.iter_mut().find(|r| r.id() == id) {
                    record.set("status", serde_json::Value::from(status));
                }
                self.resort();
            }
            Intent::Inspect(_) | Intent::Open(_) | Intent::Export(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn console(screen: Screen) -> Console {
        let records = JsonRecord::from_values(sample::records(screen)).unwrap();
        Console::new(screen, records, ConsoleSettings::default()).unwrap()
    }

    fn visible_ids(console: &mut Console) -> Vec<String> {
        let props = console.props().unwrap();
        console
            .table
            .window(&props)
            .iter()
            .map(|r| r.id().to_string())
            .collect()
    }

    #[test]
    fn test_parse_clicks() {
        assert_eq!("header:date".parse(), Ok(Click::Header("date".to_string())));
        assert_eq!("page:3".parse(), Ok(Click::Page(3)));
        assert_eq!("toggle-all".parse(), Ok(Click::ToggleAll));
        assert_eq!(
            "action:2:1".parse(),
            Ok(Click::Action { row: 2, action: 1 })
        );
        assert!("page:x".parse::<Click>().is_err());
        assert!("header".parse::<Click>().is_err());
        assert!("dance".parse::<Click>().is_err());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("date"), Ok(SortConfig::asc("date")));
        assert_eq!(parse_sort("date:desc"), Ok(SortConfig::desc("date")));
        assert!(parse_sort("date:sideways").is_err());
        assert!(parse_sort(":asc").is_err());
    }

    #[test]
    fn test_page_click_moves_host_page() {
        let mut console = console(Screen::Attendance);
        assert_eq!(console.click(&Click::Page(2)).unwrap(), EventResult::Consumed);
        assert_eq!(console.state().page, 2);
        assert_eq!(console.history(), ["go to page 2"]);
    }

    #[test]
    fn test_header_click_resorts_records() {
        let mut console = console(Screen::Attendance);
        console.set_sort(None);
        console.click(&Click::Header("hours".to_string())).unwrap();
        assert_eq!(console.state().sort, Some(SortConfig::asc("hours")));

        let props = console.props().unwrap();
        let first = console.table.window(&props)[0].field("hours");
        assert_eq!(first, datatable::FieldValue::Int(0));
    }

    #[test]
    fn test_search_resets_page() {
        let mut console = console(Screen::Attendance);
        console.state_mut().page = 2;
        console.click(&Click::Search("grace".to_string())).unwrap();
        assert_eq!(console.state().query, "grace");
        assert_eq!(console.state().page, 1);
        assert_eq!(visible_ids(&mut console).len(), 3);
    }

    #[test]
    fn test_toggle_all_then_bulk_clear() {
        let mut console = console(Screen::Leave);
        console.click(&Click::ToggleAll).unwrap();
        assert_eq!(console.state().selected.len(), 10);
        assert_eq!(console.render().unwrap().bulk.unwrap().summary, "10 selected");

        console.click(&Click::Bulk(1)).unwrap();
        assert!(console.state().selected.is_empty());
        assert!(console.render().unwrap().bulk.is_none());
    }

    #[test]
    fn test_approve_pending_request() {
        let mut console = console(Screen::Requests);
        console.set_sort(None);
        // REQ-001 is pending.
        assert_eq!(
            console.click(&Click::Action { row: 0, action: 0 }).unwrap(),
            EventResult::Consumed
        );
        let props = console.props().unwrap();
        let status = console.table.window(&props)[0].field("status");
        assert_eq!(status, datatable::FieldValue::from("Approved"));

        // Already decided: the button is disabled now.
        assert_eq!(
            console.click(&Click::Action { row: 0, action: 1 }).unwrap(),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_select_unknown_id() {
        let mut console = console(Screen::Leave);
        assert!(console.select_ids(&["100".to_string()]).is_ok());
        assert!(matches!(
            console.select_ids(&["999".to_string()]),
            Err(ConsoleError::UnknownRecord(_))
        ));
    }

    #[test]
    fn test_error_state_ignores_row_clicks() {
        let mut console = console(Screen::Leave);
        console.state_mut().error = Some("server unavailable".to_string());
        assert_eq!(console.click(&Click::Row(0)).unwrap(), EventResult::Ignored);
        let frame = console.render().unwrap();
        assert!(frame
            .lines
            .iter()
            .any(|line| line.to_plain().contains("Error: server unavailable")));
    }
}
