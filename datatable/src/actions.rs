//! Per-row actions.

use std::fmt;
use std::sync::Arc;

use crate::content::{ButtonVariant, Content};
use crate::events::RowCallback;

/// Whether an action is disabled, either fixed or decided per row.
pub enum Disabled<T> {
    Static(bool),
    When(Arc<dyn Fn(&T) -> bool + Send + Sync>),
}

impl<T> Clone for Disabled<T> {
    fn clone(&self) -> Self {
        match self {
            Disabled::Static(v) => Disabled::Static(*v),
            Disabled::When(f) => Disabled::When(Arc::clone(f)),
        }
    }
}

impl<T> Disabled<T> {
    pub fn evaluate(&self, item: &T) -> bool {
        match self {
            Disabled::Static(v) => *v,
            Disabled::When(predicate) => predicate(item),
        }
    }
}

/// A button shown on every row.
pub struct Action<T> {
    pub label: String,
    pub icon: Option<String>,
    pub variant: ButtonVariant,
    pub disabled: Disabled<T>,
    pub(crate) on_click: RowCallback<T>,
}

impl<T> Clone for Action<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            icon: self.icon.clone(),
            variant: self.variant,
            disabled: self.disabled.clone(),
            on_click: Arc::clone(&self.on_click),
        }
    }
}

impl<T> fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

impl<T> Action<T> {
    pub fn new(
        label: impl Into<String>,
        on_click: impl Fn(&T, usize) + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            icon: None,
            variant: ButtonVariant::Default,
            disabled: Disabled::Static(false),
            on_click: Arc::new(on_click),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Always disabled (or enabled).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Disabled::Static(disabled);
        self
    }

    /// Disabled for rows matching the predicate.
    pub fn disabled_when(mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.disabled = Disabled::When(Arc::new(predicate));
        self
    }

    pub fn is_disabled(&self, item: &T) -> bool {
        self.disabled.evaluate(item)
    }

    /// Button content for one row.
    pub fn content(&self, item: &T) -> Content {
        Content::Button {
            label: self.label.clone(),
            icon: self.icon.clone(),
            variant: self.variant,
            disabled: self.is_disabled(item),
        }
    }
}

/// Renders the whole action cell for a row.
pub trait ActionsRender<T>: Send + Sync {
    fn render(&self, item: &T, index: usize) -> Content;
}

impl<T, F> ActionsRender<T> for F
where
    F: Fn(&T, usize) -> Content + Send + Sync,
{
    fn render(&self, item: &T, index: usize) -> Content {
        self(item, index)
    }
}

/// Row actions: either a list of buttons or a custom renderer.
pub enum RowActions<T> {
    Buttons(Vec<Action<T>>),
    Custom(Arc<dyn ActionsRender<T>>),
}

impl<T> Clone for RowActions<T> {
    fn clone(&self) -> Self {
        match self {
            RowActions::Buttons(actions) => RowActions::Buttons(actions.clone()),
            RowActions::Custom(render) => RowActions::Custom(Arc::clone(render)),
        }
    }
}

impl<T> fmt::Debug for RowActions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowActions::Buttons(actions) => f.debug_tuple("Buttons").field(actions).finish(),
            RowActions::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl<T> RowActions<T> {
    pub fn custom(render: impl Fn(&T, usize) -> Content + Send + Sync + 'static) -> Self {
        RowActions::Custom(Arc::new(render))
    }

    /// Action cell content for one row.
    pub fn render(&self, item: &T, index: usize) -> Content {
        match self {
            RowActions::Buttons(actions) => {
                Content::Group(actions.iter().map(|action| action.content(item)).collect())
            }
            RowActions::Custom(render) => render.render(item, index),
        }
    }
}
