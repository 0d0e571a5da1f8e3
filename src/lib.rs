//! `gdscript-cst`: a streaming, lossless, error-tolerant concrete syntax
//! tree parser for GDScript (Godot Engine 3.x/4.x).
//!
//! # Architecture
//!
//! The parser is a character-driven push-down automaton (spec.md §2, §4):
//! a mutable [`state::ReadingState`] holds the character cursor, a
//! pushback channel, and a `rowan` green-tree builder; every grammar
//! function in [`grammar`] is a *reader* in spec.md's sense — it consumes
//! characters directly off the stream and either builds a token, pushes a
//! child reader (an ordinary recursive call, see `state.rs`'s module
//! doc), or hands a character back through the pushback channel
//! (`ReadingState::pass_char` and friends) for the caller to see. There is
//! no separate lexing phase: lexing and parsing are the same pass.
//!
//! # Example
//!
//! ```
//! use gdscript_cst::parse_file_content;
//!
//! let parse = parse_file_content("extends Node\n\nvar x := 1\n").expect("no recursion limit configured");
//! assert_eq!(parse.syntax().text().to_string(), "extends Node\n\nvar x := 1\n");
//! ```
//!
//! # Round-trip identity
//!
//! For every entrypoint and every input `S`, concatenating the text of
//! every token in the resulting tree (in pre-order) reproduces `S` byte
//! for byte (spec.md §3.1, §8) — whitespace, comments, line
//! continuations, carriage returns, and unparseable fragments (wrapped as
//! [`cst::SyntaxKind::InvalidToken`]) are all first-class tree members,
//! never discarded.

pub mod cst;
pub mod diagnostics;
mod error;
mod grammar;
mod indent;
mod receiver;
mod resolvers;
mod settings;
mod state;
mod trivia;

#[cfg(test)]
mod scenarios_tests;
#[cfg(test)]
mod test_util;

use rowan::GreenNode;

pub use cst::{GdLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken, TokenSet};
pub use diagnostics::{DiagnosticKind, DiagnosticMessage, Diagnostics, DiagnosticsPrinter, Severity};
pub use error::{Error, Result};
pub use receiver::{Delivery, OrSkipReceiver, Receiver};
pub use settings::ParserSettings;

use state::ReadingState;

/// The result of a parse: the root green node plus any advisory
/// diagnostics collected along the way (spec.md §4.3, §7). Always
/// present — the core does not fail a parse (see [`Error`] for the one
/// ambient exception, a caller-configured recursion guard).
#[derive(Debug, Clone)]
pub struct Parse {
    green: GreenNode,
    diagnostics: Diagnostics,
}

impl Parse {
    /// A typed, cheaply-cloneable view over the immutable green tree.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn green(&self) -> &GreenNode {
        &self.green
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Renders collected diagnostics against `source` (the exact text
    /// this `Parse` was produced from) using `annotate-snippets`.
    pub fn render_diagnostics(&self, source: &str) -> String {
        self.diagnostics.printer(source).render()
    }
}

fn finish(state: ReadingState) -> Result<Parse> {
    let fatal = state.fatal();
    let (green, diagnostics) = state.finish();
    match fatal {
        Some(err) => Err(err),
        None => Ok(Parse { green, diagnostics }),
    }
}

/// `parse_file_content(text) → ClassDeclaration` (spec.md §6). The root
/// entrypoint: parses a whole GDScript source file into a class
/// declaration. Indentation starts at threshold 0 with the first-line
/// relaxation enabled (spec.md §4.3 "used for root-level content").
pub fn parse_file_content(text: &str) -> Result<Parse> {
    parse_file_content_with_settings(text, ParserSettings::default())
}

pub fn parse_file_content_with_settings(text: &str, settings: ParserSettings) -> Result<Parse> {
    let mut state = ReadingState::new(text, settings);
    state.start_node(SyntaxKind::ClassDecl);
    grammar::members::parse_class_body(&mut state, 0, true);
    state.finish_node();
    finish(state)
}

/// `parse_expression(text) → Expression` (spec.md §6). Parses a single
/// expression; any trailing bytes that do not belong to the expression
/// (including a trailing newline) are collected as an invalid token
/// rather than discarded.
pub fn parse_expression(text: &str) -> Result<Parse> {
    parse_expression_with_settings(text, ParserSettings::default())
}

pub fn parse_expression_with_settings(text: &str, settings: ParserSettings) -> Result<Parse> {
    let mut state = ReadingState::new(text, settings);
    let checkpoint = state.checkpoint();
    grammar::expressions::parse_expression(&mut state, true);
    drain_trailing(&mut state, checkpoint);
    finish(state)
}

/// `parse_statements(text, indentation_threshold=0) → StatementList`
/// (spec.md §6). Parses a standalone statement list, e.g. a function body
/// lifted out of its enclosing declaration.
pub fn parse_statements(text: &str, indentation_threshold: u32) -> Result<Parse> {
    parse_statements_with_settings(text, indentation_threshold, ParserSettings::default())
}

pub fn parse_statements_with_settings(
    text: &str,
    indentation_threshold: u32,
    settings: ParserSettings,
) -> Result<Parse> {
    let mut state = ReadingState::new(text, settings);
    let checkpoint = state.checkpoint();
    grammar::statements::parse_statement_list(&mut state, indentation_threshold, true);
    // A statement list ends as soon as a line dedents below
    // `indentation_threshold`; unlike `parse_class_body` (always driven to
    // EOF by the root entrypoint) there is no enclosing reader left to
    // claim that dedented remainder. Drain it the same way
    // `parse_expression` drains trailing garbage, so round-trip identity
    // (spec.md §3.1, §6 "Output") holds even when the caller passes a
    // threshold the input doesn't sustain all the way to EOF.
    drain_trailing(&mut state, checkpoint);
    finish(state)
}

/// Closes the stream after a standalone-expression or standalone-statement-
/// list parse: whatever is left (stray trailing characters the resolver
/// didn't consume — garbage after an expression, or a dedented remainder
/// a statement list's threshold doesn't cover) is wrapped as a single
/// invalid-token run rather than silently dropped (spec.md §3.1 "no loss
/// on error"). This is the top-level driver's `force_complete` step
/// (spec.md §2 item 8) for the single-reader case.
///
/// `checkpoint`, taken before the expression itself, lets this retroactively
/// wrap the already-built expression node together with the trailing
/// invalid bytes into one `Invalid` root — the same checkpoint/`start_node_at`
/// trick the expression resolver uses for binary-operator wrapping. Without
/// it, a trailing-garbage parse would leave two sibling nodes at the top
/// level, which the underlying green-tree builder does not allow.
fn drain_trailing(state: &mut ReadingState, checkpoint: rowan::Checkpoint) {
    if !state.eof() {
        state.start_node_at(checkpoint, SyntaxKind::Invalid);
        state.emit_invalid_until(|_| false);
        state.finish_node();
    }
}
