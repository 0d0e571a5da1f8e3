//! Collects non-fatal parser observations. These never change what tree a
//! parse produces — they are an advisory side channel, exactly as
//! `spec.md` §4.3 and §7 describe "diagnostic-worthy events" that the core
//! "neither raises nor suppresses."

mod message;
mod printer;


use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, Severity};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) {
        self.messages
            .push(DiagnosticMessage::new(kind, range, kind.default_message()));
    }

    pub fn report_msg(&mut self, kind: DiagnosticKind, range: TextRange, message: impl Into<String>) {
        self.messages.push(DiagnosticMessage::new(kind, range, message));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn printer<'a>(&'a self, source: &'a str) -> DiagnosticsPrinter<'a> {
        DiagnosticsPrinter::new(&self.messages, source)
    }
}
