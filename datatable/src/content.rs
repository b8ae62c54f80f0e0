//! Displayable content produced by the renderer.
//!
//! The engine does not draw anything. Cells, headers, actions and body
//! placeholders all come out as [`Content`] values, which a front end (such
//! as [`crate::text::TextRenderer`]) turns into pixels or terminal cells.

/// Semantic colour of a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Primary,
    Success,
    Warning,
    Danger,
}

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    /// Tone used when the button is enabled.
    pub fn tone(self) -> Tone {
        match self {
            ButtonVariant::Default | ButtonVariant::Secondary => Tone::Default,
            ButtonVariant::Primary => Tone::Primary,
            ButtonVariant::Danger => Tone::Danger,
            ButtonVariant::Ghost => Tone::Muted,
        }
    }
}

/// State of a selection checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Indeterminate,
    Unchecked,
}

impl CheckState {
    /// Checkbox glyph for text front ends.
    pub fn glyph(self) -> &'static str {
        match self {
            CheckState::Checked => "[x]",
            CheckState::Indeterminate => "[-]",
            CheckState::Unchecked => "[ ]",
        }
    }
}

/// A displayable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Nothing.
    Empty,
    /// Plain text, optionally with a tooltip holding the untruncated value.
    Text {
        text: String,
        title: Option<String>,
        tone: Tone,
    },
    /// Short label in a pill.
    Badge { label: String, tone: Tone },
    /// Muted stand-in for a missing value.
    Placeholder(String),
    /// Busy indicator with a message.
    Spinner(String),
    /// Clickable button.
    Button {
        label: String,
        icon: Option<String>,
        variant: ButtonVariant,
        disabled: bool,
    },
    /// Selection checkbox.
    Checkbox { state: CheckState, label: String },
    /// Several pieces laid out inline.
    Group(Vec<Content>),
}

impl Content {
    /// Plain text with the default tone.
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text {
            text: text.into(),
            title: None,
            tone: Tone::Default,
        }
    }

    /// Plain text with a tone.
    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Content::Text {
            text: text.into(),
            title: None,
            tone,
        }
    }

    /// A badge.
    pub fn badge(label: impl Into<String>, tone: Tone) -> Self {
        Content::Badge {
            label: label.into(),
            tone,
        }
    }

    /// Tooltip text, if any.
    pub fn title(&self) -> Option<&str> {
        match self {
            Content::Text { title, .. } => title.as_deref(),
            _ => None,
        }
    }

    /// Dominant tone of this content.
    pub fn tone(&self) -> Tone {
        match self {
            Content::Text { tone, .. } | Content::Badge { tone, .. } => *tone,
            Content::Placeholder(_) | Content::Spinner(_) => Tone::Muted,
            Content::Button {
                variant, disabled, ..
            } => {
                if *disabled {
                    Tone::Muted
                } else {
                    variant.tone()
                }
            }
            Content::Checkbox { .. } | Content::Empty | Content::Group(_) => Tone::Default,
        }
    }

    /// Flatten to the text a terminal would show.
    pub fn plain_text(&self) -> String {
        match self {
            Content::Empty => String::new(),
            Content::Text { text, .. } => text.clone(),
            Content::Badge { label, .. } => label.clone(),
            Content::Placeholder(glyph) => glyph.clone(),
            Content::Spinner(message) => format!("⠋ {message}"),
            Content::Button {
                label,
                icon,
                disabled,
                ..
            } => {
                let label = match icon {
                    Some(icon) => format!("{icon} {label}"),
                    None => label.clone(),
                };
                if *disabled {
                    format!("({label})")
                } else {
                    format!("[{label}]")
                }
            }
            Content::Checkbox { state, .. } => state.glyph().to_string(),
            Content::Group(children) => children
                .iter()
                .map(Content::plain_text)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::text(text)
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::text(text)
    }
}
