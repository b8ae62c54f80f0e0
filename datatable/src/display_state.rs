//! Which presentation replaces the table body.

use std::fmt;
use std::sync::Arc;

use crate::content::{Content, Tone};

/// Body presentation. Exactly one applies per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Error,
    Loading,
    Empty,
    Populated,
}

/// Resolve the body presentation.
///
/// Precedence is error, then loading, then empty, then populated. An error
/// always wins over a loading flag left set. `filtered_len` must be the row
/// count after search, so a search with no hits shows the empty state even
/// when the host supplied records.
pub fn resolve(loading: bool, error: Option<&str>, filtered_len: usize) -> DisplayState {
    if error.is_some() {
        DisplayState::Error
    } else if loading {
        DisplayState::Loading
    } else if filtered_len == 0 {
        DisplayState::Empty
    } else {
        DisplayState::Populated
    }
}

pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

type StateRender = Arc<dyn Fn() -> Content + Send + Sync>;
type ErrorRender = Arc<dyn Fn(&str) -> Content + Send + Sync>;

/// Flags, messages and overrides for the non-populated states.
#[derive(Clone)]
pub struct DisplayOptions {
    pub loading: bool,
    pub error: Option<String>,
    pub loading_message: String,
    pub empty_message: String,
    loading_render: Option<StateRender>,
    error_render: Option<ErrorRender>,
    empty_render: Option<StateRender>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            loading_message: DEFAULT_LOADING_MESSAGE.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            loading_render: None,
            error_render: None,
            empty_render: None,
        }
    }
}

impl fmt::Debug for DisplayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayOptions")
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("loading_message", &self.loading_message)
            .field("empty_message", &self.empty_message)
            .finish_non_exhaustive()
    }
}

impl DisplayOptions {
    pub fn loading_render(mut self, f: impl Fn() -> Content + Send + Sync + 'static) -> Self {
        self.loading_render = Some(Arc::new(f));
        self
    }

    pub fn error_render(mut self, f: impl Fn(&str) -> Content + Send + Sync + 'static) -> Self {
        self.error_render = Some(Arc::new(f));
        self
    }

    pub fn empty_render(mut self, f: impl Fn() -> Content + Send + Sync + 'static) -> Self {
        self.empty_render = Some(Arc::new(f));
        self
    }

    /// Content replacing the body for a non-populated state.
    pub(crate) fn placeholder(&self, state: DisplayState) -> Option<Content> {
        match state {
            DisplayState::Error => {
                let message = self.error.as_deref().unwrap_or_default();
                Some(match &self.error_render {
                    Some(render) => render(message),
                    None => Content::toned(format!("Error: {message}"), Tone::Danger),
                })
            }
            DisplayState::Loading => Some(match &self.loading_render {
                Some(render) => render(),
                None => Content::Spinner(self.loading_message.clone()),
            }),
            DisplayState::Empty => Some(match &self.empty_render {
                Some(render) => render(),
                None => Content::toned(self.empty_message.clone(), Tone::Muted),
            }),
            DisplayState::Populated => None,
        }
    }
}
