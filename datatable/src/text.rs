//! Terminal text front end.
//!
//! Lays a [`TableView`] out as lines of toned spans. Widths are measured in
//! terminal columns, not chars, so wide glyphs line up.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::column::Align;
use crate::content::{Content, Tone};
use crate::pagination::PageControl;
use crate::view::{BodyView, PaginationView, TableView};

const ELLIPSIS: &str = "…";
const CHECKBOX_WIDTH: usize = 3;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to fit `max_width` columns, ending in an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if width + w > target {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Fit `s` into exactly `width` columns.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    let s = truncate_to_width(s, width);
    let gap = width.saturating_sub(display_width(&s));
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Center => (gap / 2, gap - gap / 2),
        Align::Right => (gap, 0),
    };
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Default)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLine {
    pub spans: Vec<Span>,
    /// Alternate row under a striped style.
    pub striped: bool,
}

impl TextLine {
    fn new(spans: Vec<Span>) -> Self {
        Self {
            spans,
            striped: false,
        }
    }

    fn blank() -> Self {
        Self::default()
    }

    /// Line text without tones or trailing blanks.
    pub fn to_plain(&self) -> String {
        let text: String = self.spans.iter().map(|s| s.text.as_str()).collect();
        text.trim_end().to_string()
    }
}

// =============================================================================
// Layout
// =============================================================================

/// One horizontal slot of the grid.
#[derive(Debug, Clone, Copy)]
struct Slot {
    width: usize,
    align: Align,
}

struct Frame {
    left: &'static str,
    sep: &'static str,
    right: &'static str,
}

const PLAIN: Frame = Frame {
    left: "",
    sep: "  ",
    right: "",
};

const BORDERED: Frame = Frame {
    left: "│ ",
    sep: " │ ",
    right: " │",
};

#[derive(Clone, Copy)]
enum Rule {
    Top,
    Middle,
    Bottom,
}

/// Lays out a [`TableView`] as terminal lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the view as one string, lines joined by `\n`.
    pub fn render_string(&self, view: &TableView) -> String {
        self.render(view)
            .iter()
            .map(TextLine::to_plain)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render(&self, view: &TableView) -> Vec<TextLine> {
        let frame = if view.style.bordered { &BORDERED } else { &PLAIN };
        let slots = slots(view);
        let mut lines = Vec::new();

        if let Some(caption) = &view.caption {
            lines.push(TextLine::new(vec![Span::plain(caption.clone())]));
        }
        if let Some(search) = &view.search {
            let value = if search.value.is_empty() {
                Span::new(search.placeholder.clone(), Tone::Muted)
            } else {
                Span::plain(search.value.clone())
            };
            lines.push(TextLine::new(vec![
                Span::plain(format!("{}: ", search.label)),
                value,
            ]));
        }
        if !view.style.compact && !lines.is_empty() {
            lines.push(TextLine::blank());
        }

        if view.style.bordered {
            lines.push(rule(&slots, Rule::Top));
        }
        lines.push(grid_line(frame, &slots, header_cells(view)));
        lines.push(if view.style.bordered {
            rule(&slots, Rule::Middle)
        } else {
            rule_plain(frame, &slots)
        });

        match &view.body {
            BodyView::Rows(rows) => {
                for row in rows {
                    let mut cells = Vec::with_capacity(slots.len());
                    if view.selection_enabled {
                        cells.push(cell_span(row.checkbox.as_ref()));
                    }
                    if view.style.show_row_numbers {
                        cells.push(Span::new(row.number.to_string(), Tone::Muted));
                    }
                    cells.extend(row.cells.iter().map(|cell| cell_span(Some(&cell.content))));
                    if view.actions_header.is_some() {
                        cells.push(cell_span(row.actions.as_ref()));
                    }
                    let mut line = grid_line(frame, &slots, cells);
                    line.striped = row.striped;
                    lines.push(line);
                }
            }
            BodyView::Placeholder { content, .. } => {
                let inner = inner_width(frame, &slots);
                let text = pad(&content.plain_text(), inner, Align::Center);
                lines.push(TextLine::new(vec![
                    Span::plain(frame.left),
                    Span::new(text, content.tone()),
                    Span::plain(frame.right),
                ]));
            }
        }

        if view.style.bordered {
            lines.push(rule(&slots, Rule::Bottom));
        }

        if let Some(pagination) = &view.pagination {
            if !view.style.compact {
                lines.push(TextLine::blank());
            }
            lines.extend(pagination_lines(pagination));
        }
        lines
    }
}

fn slots(view: &TableView) -> Vec<Slot> {
    let mut slots = Vec::new();
    if view.selection_enabled {
        slots.push(Slot {
            width: CHECKBOX_WIDTH,
            align: Align::Left,
        });
    }
    if view.style.show_row_numbers {
        let widest = view.rows().iter().map(|r| r.number).max().unwrap_or(0);
        slots.push(Slot {
            width: widest.to_string().len().max(1),
            align: Align::Right,
        });
    }
    slots.extend(view.header.iter().map(|h| Slot {
        width: usize::from(h.width),
        align: h.align,
    }));
    if let Some(label) = &view.actions_header {
        let widest = view
            .rows()
            .iter()
            .filter_map(|r| r.actions.as_ref())
            .map(|a| display_width(&a.plain_text()))
            .max()
            .unwrap_or(0);
        slots.push(Slot {
            width: widest.max(display_width(label)),
            align: Align::Left,
        });
    }
    slots
}

fn header_cells(view: &TableView) -> Vec<Span> {
    let mut cells = Vec::new();
    if view.selection_enabled {
        cells.push(cell_span(view.select_all.as_ref()));
    }
    if view.style.show_row_numbers {
        cells.push(Span::new("#", Tone::Muted));
    }
    cells.extend(view.header.iter().map(|h| cell_span(Some(&h.content))));
    if let Some(label) = &view.actions_header {
        cells.push(Span::plain(label.clone()));
    }
    cells
}

fn cell_span(content: Option<&Content>) -> Span {
    match content {
        Some(content) => Span::new(content.plain_text(), content.tone()),
        None => Span::plain(""),
    }
}

fn grid_line(frame: &Frame, slots: &[Slot], cells: Vec<Span>) -> TextLine {
    let mut spans = vec![Span::plain(frame.left)];
    for (i, (slot, cell)) in slots.iter().zip(cells).enumerate() {
        if i > 0 {
            spans.push(Span::plain(frame.sep));
        }
        spans.push(Span::new(pad(&cell.text, slot.width, slot.align), cell.tone));
    }
    spans.push(Span::plain(frame.right));
    TextLine::new(spans)
}

fn inner_width(frame: &Frame, slots: &[Slot]) -> usize {
    let cells: usize = slots.iter().map(|s| s.width).sum();
    cells + display_width(frame.sep) * slots.len().saturating_sub(1)
}

fn rule_plain(frame: &Frame, slots: &[Slot]) -> TextLine {
    let parts: Vec<String> = slots.iter().map(|s| "─".repeat(s.width)).collect();
    TextLine::new(vec![Span::new(parts.join(frame.sep), Tone::Muted)])
}

fn rule(slots: &[Slot], kind: Rule) -> TextLine {
    let (left, join, right) = match kind {
        Rule::Top => ("┌─", "─┬─", "─┐"),
        Rule::Middle => ("├─", "─┼─", "─┤"),
        Rule::Bottom => ("└─", "─┴─", "─┘"),
    };
    let parts: Vec<String> = slots.iter().map(|s| "─".repeat(s.width)).collect();
    TextLine::new(vec![Span::new(
        format!("{left}{}{right}", parts.join(join)),
        Tone::Muted,
    )])
}

fn pagination_lines(pagination: &PaginationView) -> Vec<TextLine> {
    let mut controls = Vec::new();
    for (i, control) in pagination.controls.iter().enumerate() {
        if i > 0 {
            controls.push(Span::plain(" "));
        }
        controls.push(match control {
            PageControl::Previous { disabled } => Span::new("‹ Prev", nav_tone(*disabled)),
            PageControl::Next { disabled } => Span::new("Next ›", nav_tone(*disabled)),
            PageControl::Page { number, active: true } => {
                Span::new(format!("[{number}]"), Tone::Primary)
            }
            PageControl::Page { number, .. } => Span::plain(number.to_string()),
            PageControl::Ellipsis => Span::new(ELLIPSIS, Tone::Muted),
        });
    }

    let mut lines = vec![
        TextLine::new(controls),
        TextLine::new(vec![Span::new(pagination.summary.to_string(), Tone::Muted)]),
    ];

    if !pagination.page_size_options.is_empty() {
        let mut spans = vec![Span::plain("Rows per page:")];
        for &size in &pagination.page_size_options {
            spans.push(Span::plain(" "));
            spans.push(if size == pagination.page_size {
                Span::new(format!("[{size}]"), Tone::Primary)
            } else {
                Span::plain(size.to_string())
            });
        }
        lines.push(TextLine::new(spans));
    }
    lines
}

fn nav_tone(disabled: bool) -> Tone {
    if disabled { Tone::Muted } else { Tone::Default }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 8), "hello w…");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK char is two columns wide.
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
    }

    #[test]
    fn test_pad_alignments() {
        assert_eq!(pad("ab", 5, Align::Left), "ab   ");
        assert_eq!(pad("ab", 5, Align::Right), "   ab");
        assert_eq!(pad("ab", 5, Align::Center), " ab  ");
        assert_eq!(pad("abcdef", 4, Align::Left), "abc…");
    }

    #[test]
    fn test_to_plain_trims_trailing_blanks() {
        let line = TextLine::new(vec![Span::plain("a  "), Span::new("b   ", Tone::Muted)]);
        assert_eq!(line.to_plain(), "a  b");
    }
}
