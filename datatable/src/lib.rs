//! Data table engine
//!
//! Filtering, sorting requests, pagination, selection, cell rendering and
//! display-state resolution for tabular records. Hosts own all state and
//! receive intents through callbacks; the table computes a [`TableView`]
//! that any front end can draw.

extern crate self as datatable;

pub mod actions;
pub mod bulk;
pub mod column;
pub mod content;
pub mod display_state;
pub mod error;
pub mod events;
pub mod filter;
pub mod item;
pub mod pagination;
pub mod props;
pub mod render;
pub mod search;
pub mod selection;
pub mod sort;
pub mod text;
pub mod value;
pub mod view;
pub mod width;

mod memo;
mod table;

pub use datatable_derive::DataItem;
pub use memo::MemoStats;
pub use table::DataTable;

pub use actions::{Action, RowActions};
pub use bulk::{BulkAction, BulkActionBar};
pub use column::{Align, Column, ColumnSet};
pub use content::{ButtonVariant, CheckState, Content, Tone};
pub use display_state::{DisplayOptions, DisplayState};
pub use error::TableError;
pub use events::{EventResult, TableEvent};
pub use item::{DataItem, JsonRecord, RecordId};
pub use pagination::PaginationConfig;
pub use props::TableProps;
pub use search::{Search, SearchConfig};
pub use selection::{SelectionConfig, SelectionMode};
pub use sort::{SortConfig, SortDirection};
pub use text::TextRenderer;
pub use value::{FieldValue, ToFieldValue};
pub use view::{Labels, TableStyle, TableView};
