//! Column model.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::content::Content;
use crate::error::TableError;
use crate::item::DataItem;
use crate::sort::SortConfig;
use crate::value::FieldValue;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Per-column cell renderer. Replaces default formatting entirely.
///
/// Closures of the shape `Fn(&FieldValue, &T, usize) -> Content` implement
/// this automatically.
pub trait CellRender<T>: Send + Sync {
    fn render(&self, value: &FieldValue, item: &T, index: usize) -> Content;
}

impl<T, F> CellRender<T> for F
where
    F: Fn(&FieldValue, &T, usize) -> Content + Send + Sync,
{
    fn render(&self, value: &FieldValue, item: &T, index: usize) -> Content {
        self(value, item, index)
    }
}

/// Per-column header renderer. Replaces the label and sort indicator.
///
/// Receives the host's current sort so a custom header can still show it.
pub trait HeaderRender<T>: Send + Sync {
    fn render(&self, column: &Column<T>, sort: Option<&SortConfig>) -> Content;
}

impl<T, F> HeaderRender<T> for F
where
    F: Fn(&Column<T>, Option<&SortConfig>) -> Content + Send + Sync,
{
    fn render(&self, column: &Column<T>, sort: Option<&SortConfig>) -> Content {
        self(column, sort)
    }
}

type Accessor<T> = Arc<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// Column configuration.
///
/// # Examples
///
/// ```ignore
/// let columns = ColumnSet::new(vec![
///     Column::new("id", "ID").width(6),
///     Column::new("name", "Employee").sortable().filterable(),
///     Column::new("hours", "Hours")
///         .align(Align::Right)
///         .accessor(|row: &Attendance| row.hours.into()),
/// ])?;
/// ```
pub struct Column<T> {
    /// Field key, unique within a table.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether header clicks request a sort.
    pub sortable: bool,
    /// Whether the column takes part in search when no explicit keys are set.
    pub filterable: bool,
    /// Width in terminal cells. Inferred from the key when `None`.
    pub width: Option<u16>,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub align: Align,
    pub class_name: Option<String>,
    pub header_class_name: Option<String>,
    accessor: Option<Accessor<T>>,
    render: Option<Arc<dyn CellRender<T>>>,
    header_render: Option<Arc<dyn HeaderRender<T>>>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            filterable: self.filterable,
            width: self.width,
            min_width: self.min_width,
            max_width: self.max_width,
            align: self.align,
            class_name: self.class_name.clone(),
            header_class_name: self.header_class_name.clone(),
            accessor: self.accessor.clone(),
            render: self.render.clone(),
            header_render: self.header_render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("filterable", &self.filterable)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("custom_render", &self.render.is_some())
            .field("custom_header", &self.header_render.is_some())
            .finish_non_exhaustive()
    }
}

impl<T> Column<T> {
    /// Create a column reading `key` and headed by `label`.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            filterable: false,
            width: None,
            min_width: None,
            max_width: None,
            align: Align::Left,
            class_name: None,
            header_class_name: None,
            accessor: None,
            render: None,
            header_render: None,
        }
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show sort indicators in the header and
    /// respond to clicks by emitting a sort request.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Include this column in search when the table has no explicit keys.
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn header_class_name(mut self, class: impl Into<String>) -> Self {
        self.header_class_name = Some(class.into());
        self
    }

    /// Read the cell value with a typed accessor instead of the record's
    /// `field(key)` lookup.
    pub fn accessor(mut self, accessor: impl Fn(&T) -> FieldValue + Send + Sync + 'static) -> Self {
        self.accessor = Some(Arc::new(accessor));
        self
    }

    /// Replace default cell formatting with a closure.
    pub fn render<F>(self, render: F) -> Self
    where
        F: Fn(&FieldValue, &T, usize) -> Content + Send + Sync + 'static,
    {
        self.cell_strategy(Arc::new(render))
    }

    /// Replace default cell formatting with a shared renderer.
    pub fn cell_strategy(mut self, render: Arc<dyn CellRender<T>>) -> Self {
        self.render = Some(render);
        self
    }

    /// Replace the default header (label plus sort indicator) with a closure.
    pub fn header_render<F>(self, render: F) -> Self
    where
        F: Fn(&Column<T>, Option<&SortConfig>) -> Content + Send + Sync + 'static,
    {
        self.header_strategy(Arc::new(render))
    }

    /// Replace the default header with a shared renderer.
    pub fn header_strategy(mut self, render: Arc<dyn HeaderRender<T>>) -> Self {
        self.header_render = Some(render);
        self
    }

    pub(crate) fn cell_renderer(&self) -> Option<&dyn CellRender<T>> {
        self.render.as_deref()
    }

    pub(crate) fn header_renderer(&self) -> Option<&dyn HeaderRender<T>> {
        self.header_render.as_deref()
    }
}

impl<T: DataItem> Column<T> {
    /// The raw value of this column for a record.
    pub fn value(&self, item: &T) -> FieldValue {
        match &self.accessor {
            Some(accessor) => accessor(item),
            None => item.field(&self.key),
        }
    }
}

/// A validated, shareable list of columns with unique keys.
///
/// Cloning is cheap and keeps identity, which the table uses to cache
/// column widths between renders.
pub struct ColumnSet<T> {
    columns: Arc<[Column<T>]>,
}

impl<T> Clone for ColumnSet<T> {
    fn clone(&self) -> Self {
        Self {
            columns: Arc::clone(&self.columns),
        }
    }
}

impl<T> fmt::Debug for ColumnSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

impl<T> ColumnSet<T> {
    /// Validate and wrap a list of columns.
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.key.is_empty() {
                return Err(TableError::EmptyColumnKey);
            }
            if !seen.insert(column.key.as_str()) {
                return Err(TableError::DuplicateColumnKey(column.key.clone()));
            }
        }
        Ok(Self {
            columns: columns.into(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column<T>> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Find a column by key.
    pub fn get(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Keys of every filterable column, in column order.
    pub fn filterable_keys(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.filterable)
            .map(|c| c.key.clone())
            .collect()
    }

    pub(crate) fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.columns, &other.columns)
    }
}

impl<'a, T> IntoIterator for &'a ColumnSet<T> {
    type Item = &'a Column<T>;
    type IntoIter = std::slice::Iter<'a, Column<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
