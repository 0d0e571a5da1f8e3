//! A single diagnostic message (spec.md §4.3 "diagnostic-worthy event").

use rowan::TextRange;

/// Severity of a parser observation. The core never fails a parse (spec.md
/// §7 "There is none at this layer"), so `Severity::Error` is unused by the
/// core itself today but kept — as the teacher's `Severity` is — so a
/// downstream consumer (out of scope per spec.md §1) can layer its own
/// fatal diagnostics onto the same type without inventing a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Advisory,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Leading whitespace on a line mixes tabs after spaces in a way that
    /// makes the measured indentation ambiguous under a different
    /// `tab_spaces_cost` (spec.md §4.3).
    MixedIndentation,
    /// A construct (string, bracketed expression, ...) was still open when
    /// the input ended; `force_complete` closed it in place (spec.md §7).
    UnterminatedAtEof,
    /// A `\` was followed by a character that is not a recognized escape;
    /// both bytes were pushed back out of the string (spec.md §3.4, §7).
    MalformedEscape,
}

impl DiagnosticKind {
    pub fn default_message(self) -> &'static str {
        match self {
            DiagnosticKind::MixedIndentation => {
                "leading whitespace mixes tabs after spaces; indentation width is ambiguous"
            }
            DiagnosticKind::UnterminatedAtEof => "construct was not closed before end of input",
            DiagnosticKind::MalformedEscape => "not a recognized escape sequence",
        }
    }

    pub fn severity(self) -> Severity {
        Severity::Advisory
    }
}

#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub range: TextRange,
    pub message: String,
    pub severity: Severity,
}

impl DiagnosticMessage {
    pub fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            severity: kind.severity(),
            kind,
            range,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}
