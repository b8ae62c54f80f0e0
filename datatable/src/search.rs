//! Search box configuration.
//!
//! The search text is either owned by the host ([`Search::Controlled`]) or
//! kept by the table instance itself ([`Search::Uncontrolled`]), seeded from
//! an initial value and updated on every edit.

use std::fmt;
use std::sync::Arc;

use crate::events::Callback;

/// Who owns the search text.
#[derive(Clone, Default)]
pub enum Search {
    /// No search box.
    #[default]
    Disabled,
    /// The host owns the text and re-supplies it every render.
    Controlled {
        value: String,
        on_change: Callback<String>,
    },
    /// The table keeps the text; the host is only notified.
    Uncontrolled {
        initial: String,
        on_change: Option<Callback<String>>,
    },
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Search::Disabled => write!(f, "Disabled"),
            Search::Controlled { value, .. } => {
                f.debug_struct("Controlled").field("value", value).finish_non_exhaustive()
            }
            Search::Uncontrolled { initial, .. } => f
                .debug_struct("Uncontrolled")
                .field("initial", initial)
                .finish_non_exhaustive(),
        }
    }
}

impl Search {
    pub fn controlled(
        value: impl Into<String>,
        on_change: impl Fn(String) + Send + Sync + 'static,
    ) -> Self {
        Search::Controlled {
            value: value.into(),
            on_change: Arc::new(on_change),
        }
    }

    pub fn uncontrolled(initial: impl Into<String>) -> Self {
        Search::Uncontrolled {
            initial: initial.into(),
            on_change: None,
        }
    }

    /// Uncontrolled search that also reports each edit.
    pub fn uncontrolled_with(
        initial: impl Into<String>,
        on_change: impl Fn(String) + Send + Sync + 'static,
    ) -> Self {
        Search::Uncontrolled {
            initial: initial.into(),
            on_change: Some(Arc::new(on_change)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Search::Disabled)
    }
}

pub const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Search box settings.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub mode: Search,
    /// Fields searched. Falls back to the filterable columns when empty.
    pub keys: Vec<String>,
    pub placeholder: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: Search::Disabled,
            keys: Vec::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn new(mode: Search) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

/// Text kept by the table for uncontrolled search.
#[derive(Debug, Default)]
pub(crate) struct LocalSearch {
    value: Option<String>,
}

impl LocalSearch {
    /// Effective query for this render.
    pub(crate) fn current<'a>(&'a self, mode: &'a Search) -> &'a str {
        match mode {
            Search::Disabled => "",
            Search::Controlled { value, .. } => value,
            Search::Uncontrolled { initial, .. } => self.value.as_deref().unwrap_or(initial),
        }
    }

    /// Apply an edit. Returns `false` when search is disabled.
    pub(crate) fn edit(&mut self, mode: &Search, value: String) -> bool {
        match mode {
            Search::Disabled => false,
            Search::Controlled { on_change, .. } => {
                on_change(value);
                true
            }
            Search::Uncontrolled { on_change, .. } => {
                self.value = Some(value.clone());
                if let Some(on_change) = on_change {
                    on_change(value);
                }
                true
            }
        }
    }
}
