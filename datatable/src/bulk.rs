//! Bulk-action bar shown alongside a table while records are selected.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::content::{ButtonVariant, Content};
use crate::events::EventResult;

/// An action applied to every selected record at once.
pub struct BulkAction<Id> {
    pub label: String,
    pub variant: ButtonVariant,
    on_click: Arc<dyn Fn(&[Id]) + Send + Sync>,
}

impl<Id> Clone for BulkAction<Id> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            variant: self.variant,
            on_click: Arc::clone(&self.on_click),
        }
    }
}

impl<Id> fmt::Debug for BulkAction<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BulkAction")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}

impl<Id> BulkAction<Id> {
    pub fn new(label: impl Into<String>, on_click: impl Fn(&[Id]) + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Default,
            on_click: Arc::new(on_click),
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// What the bar shows for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkBarView {
    pub summary: String,
    pub buttons: Vec<Content>,
}

/// A bar of bulk actions. Hidden while nothing is selected.
#[derive(Debug, Clone)]
pub struct BulkActionBar<Id> {
    actions: Vec<BulkAction<Id>>,
}

impl<Id> Default for BulkActionBar<Id> {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
        }
    }
}

impl<Id> BulkActionBar<Id> {
    pub fn new(actions: Vec<BulkAction<Id>>) -> Self {
        Self { actions }
    }

    pub fn action(mut self, action: BulkAction<Id>) -> Self {
        self.actions.push(action);
        self
    }

    /// Bar contents, or `None` when nothing is selected.
    pub fn render(&self, selected_ids: &[Id]) -> Option<BulkBarView> {
        if selected_ids.is_empty() {
            return None;
        }
        Some(BulkBarView {
            summary: format!("{} selected", selected_ids.len()),
            buttons: self
                .actions
                .iter()
                .map(|action| Content::Button {
                    label: action.label.clone(),
                    icon: None,
                    variant: action.variant,
                    disabled: false,
                })
                .collect(),
        })
    }

    /// Run the action at `index` on the selected ids.
    pub fn click(&self, index: usize, selected_ids: &[Id]) -> EventResult {
        if selected_ids.is_empty() {
            return EventResult::Ignored;
        }
        let Some(action) = self.actions.get(index) else {
            debug!("bulk action {index} does not exist");
            return EventResult::Ignored;
        };
        debug!("bulk action '{}' on {} records", action.label, selected_ids.len());
        (action.on_click)(selected_ids);
        EventResult::Consumed
    }
}
