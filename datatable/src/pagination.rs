//! Page windowing and page controls.
//!
//! The current page is owned by the host. The table only slices the filtered
//! rows for it and reports page clicks back through `on_page_change`.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::error::TableError;
use crate::events::Callback;

/// Number of numbered page buttons shown around the current page.
pub const DEFAULT_PAGE_RUN: usize = 5;

/// Page sizes offered by the page-size selector unless configured otherwise.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Host-controlled pagination.
pub struct PaginationConfig {
    current_page: usize,
    page_size: usize,
    total_items: usize,
    page_size_options: Vec<usize>,
    page_run: usize,
    pub(crate) on_page_change: Callback<usize>,
    pub(crate) on_page_size_change: Option<Callback<usize>>,
}

impl fmt::Debug for PaginationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationConfig")
            .field("current_page", &self.current_page)
            .field("page_size", &self.page_size)
            .field("total_items", &self.total_items)
            .field("page_size_options", &self.page_size_options)
            .field("page_run", &self.page_run)
            .finish_non_exhaustive()
    }
}

impl PaginationConfig {
    /// Create a pagination config. Pages are numbered from 1.
    pub fn new(
        current_page: usize,
        page_size: usize,
        total_items: usize,
        on_page_change: impl Fn(usize) + Send + Sync + 'static,
    ) -> Result<Self, TableError> {
        if current_page == 0 {
            return Err(TableError::InvalidPage(current_page));
        }
        if page_size == 0 {
            return Err(TableError::InvalidPageSize(page_size));
        }
        Ok(Self {
            current_page,
            page_size,
            total_items,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            page_run: DEFAULT_PAGE_RUN,
            on_page_change: Arc::new(on_page_change),
            on_page_size_change: None,
        })
    }

    /// Enable the page-size selector.
    pub fn on_page_size_change(mut self, f: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_page_size_change = Some(Arc::new(f));
        self
    }

    /// Sizes offered by the page-size selector.
    pub fn page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options.into_iter().filter(|&size| size > 0).collect();
        self
    }

    /// Number of numbered page buttons to show (at least 1).
    pub fn page_run(mut self, run: usize) -> Self {
        self.page_run = run.max(1);
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The host's page clamped to the last page.
    ///
    /// The page controls highlight this page and navigation starts from it,
    /// so a stale host page past the end still gets working Previous/Next.
    pub fn active_page(&self) -> usize {
        self.current_page.min(self.total_pages()).max(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    pub fn options(&self) -> &[usize] {
        &self.page_size_options
    }

    /// Page-size choices to show, empty when the host did not ask for a selector.
    pub(crate) fn selector_options(&self) -> Vec<usize> {
        if self.on_page_size_change.is_some() {
            self.page_size_options.clone()
        } else {
            Vec::new()
        }
    }

    /// Page controls for this config.
    pub fn controls(&self) -> Vec<PageControl> {
        page_controls(self.active_page(), self.total_pages(), self.page_run)
    }

    /// "Showing X to Y of Z" figures for this config.
    pub fn summary(&self) -> PageSummary {
        PageSummary::new(self.current_page, self.page_size, self.total_items)
    }
}

/// `ceil(total_items / page_size)`; zero when the page size is zero.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Index range of page `current_page` within `len` rows, clamped to bounds.
pub fn window_range(len: usize, current_page: usize, page_size: usize) -> Range<usize> {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Slice of `items` shown on `current_page`.
pub fn window<T>(items: &[T], current_page: usize, page_size: usize) -> &[T] {
    &items[window_range(items.len(), current_page, page_size)]
}

/// One element of the page control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { disabled: bool },
}

/// Build the page control strip.
///
/// Shows a run of at most `run` page numbers centred on `current`, shifted to
/// stay inside `1..=total`. First and last pages are added as shortcuts when
/// the run does not reach them, with an ellipsis when there is a gap.
/// Returns nothing when there is at most one page.
pub fn page_controls(current: usize, total: usize, run: usize) -> Vec<PageControl> {
    if total <= 1 {
        return Vec::new();
    }

    let run = run.clamp(1, total);
    let current = current.clamp(1, total);
    let mut start = current.saturating_sub(run / 2).max(1);
    let end = (start + run - 1).min(total);
    if end + 1 - start < run {
        start = (end + 1).saturating_sub(run).max(1);
    }

    let mut controls = vec![PageControl::Previous {
        disabled: current == 1,
    }];

    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    controls.extend((start..=end).map(|number| PageControl::Page {
        number,
        active: number == current,
    }));

    if end < total {
        if end < total - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: total,
            active: false,
        });
    }

    controls.push(PageControl::Next {
        disabled: current == total,
    });
    controls
}

/// One-based row numbers shown on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl PageSummary {
    pub fn new(current_page: usize, page_size: usize, total_items: usize) -> Self {
        let range = window_range(total_items, current_page, page_size);
        if range.is_empty() {
            return Self {
                from: 0,
                to: 0,
                total: total_items,
            };
        }
        Self {
            from: range.start + 1,
            to: range.end,
            total: total_items,
        }
    }
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} entries",
            self.from, self.to, self.total
        )
    }
}
