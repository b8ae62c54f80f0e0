//! Writing rendered frames to the terminal.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use datatable::Tone;
use datatable::bulk::BulkBarView;
use datatable::text::{Span, TextLine};
use datatable::{ButtonVariant, Content};

use crate::console::Frame;

/// Background for alternate rows of a striped table.
const STRIPE: Color = Color::AnsiValue(236);

fn tone_color(tone: Tone) -> Option<Color> {
    match tone {
        Tone::Default => None,
        Tone::Muted => Some(Color::DarkGrey),
        Tone::Primary => Some(Color::Cyan),
        Tone::Success => Some(Color::Green),
        Tone::Warning => Some(Color::Yellow),
        Tone::Danger => Some(Color::Red),
    }
}

/// The bulk bar as one line: summary, then one bracketed button per action.
fn bulk_line(bar: &BulkBarView) -> TextLine {
    let mut spans = vec![Span::new(bar.summary.clone(), Tone::Primary)];
    for button in &bar.buttons {
        if let Content::Button { label, variant, .. } = button {
            spans.push(Span::plain("  "));
            let tone = match variant {
                ButtonVariant::Ghost => Tone::Muted,
                other => other.tone(),
            };
            spans.push(Span::new(format!("[{label}]"), tone));
        }
    }
    TextLine {
        spans,
        striped: false,
    }
}

pub struct Printer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn frame(&mut self, frame: &Frame) -> io::Result<()> {
        for line in &frame.lines {
            self.line(line)?;
        }
        if let Some(bar) = &frame.bulk {
            writeln!(self.out)?;
            self.line(&bulk_line(bar))?;
        }
        self.out.flush()
    }

    fn line(&mut self, line: &TextLine) -> io::Result<()> {
        if !self.color {
            return writeln!(self.out, "{}", line.to_plain());
        }

        if line.striped {
            queue!(self.out, SetBackgroundColor(STRIPE))?;
        }
        for span in &line.spans {
            match tone_color(span.tone) {
                Some(color) => {
                    queue!(self.out, SetForegroundColor(color))?;
                    if span.tone == Tone::Danger {
                        queue!(self.out, SetAttribute(Attribute::Bold))?;
                    }
                    queue!(
                        self.out,
                        Print(&span.text),
                        SetAttribute(Attribute::NormalIntensity),
                        SetForegroundColor(Color::Reset)
                    )?;
                }
                None => queue!(self.out, Print(&span.text))?,
            }
        }
        queue!(self.out, ResetColor, Print("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(lines: Vec<TextLine>, bulk: Option<BulkBarView>) -> Frame {
        Frame { lines, bulk }
    }

    fn line(spans: Vec<Span>, striped: bool) -> TextLine {
        TextLine { spans, striped }
    }

    #[test]
    fn test_plain_output_has_no_escapes() {
        let mut printer = Printer::new(Vec::new(), false);
        printer
            .frame(&frame(
                vec![line(
                    vec![Span::plain("Alice  "), Span::new("Active", Tone::Success)],
                    true,
                )],
                None,
            ))
            .unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, "Alice  Active\n");
    }

    #[test]
    fn test_colored_output_wraps_toned_spans() {
        let mut printer = Printer::new(Vec::new(), true);
        printer
            .frame(&frame(
                vec![line(vec![Span::new("Late", Tone::Warning)], false)],
                None,
            ))
            .unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert!(out.contains("Late"));
        assert!(out.contains('\u{1b}'));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn test_bulk_bar_follows_table() {
        let bar = BulkBarView {
            summary: "2 selected".to_string(),
            buttons: vec![Content::Button {
                label: "Export".to_string(),
                icon: None,
                variant: ButtonVariant::Primary,
                disabled: false,
            }],
        };
        let mut printer = Printer::new(Vec::new(), false);
        printer
            .frame(&frame(vec![line(vec![Span::plain("table")], false)], Some(bar)))
            .unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert_eq!(out, "table\n\n2 selected  [Export]\n");
    }
}
