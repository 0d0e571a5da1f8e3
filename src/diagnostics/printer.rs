//! Renders collected diagnostics against source text, the way the teacher's
//! `diagnostics/printer.rs` renders compiler diagnostics with
//! `annotate-snippets`. Ours are always advisory — nothing here is required
//! reading for a caller (spec.md §7 "user-visible failure: none").

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use super::message::{DiagnosticMessage, Severity};

pub struct DiagnosticsPrinter<'a> {
    messages: &'a [DiagnosticMessage],
    source: &'a str,
    colored: bool,
}

impl<'a> DiagnosticsPrinter<'a> {
    pub fn new(messages: &'a [DiagnosticMessage], source: &'a str) -> Self {
        Self {
            messages,
            source,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.messages.is_empty() {
            return Ok(());
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, msg) in self.messages.iter().enumerate() {
            let range = adjust_range(msg.range, self.source.len());
            let snippet = Snippet::source(self.source).line_start(1).annotation(
                AnnotationKind::Primary.span(range).label(&msg.message),
            );
            let level = severity_to_level(msg.severity);
            let group = level.primary_title(&msg.message).element(snippet);

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&[group]))?;
        }

        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
        Severity::Advisory => Level::NOTE,
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();
    if start == end {
        return start..(start + 1).min(limit);
    }
    start..end
}
