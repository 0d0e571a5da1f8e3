//! The Indented Reader (spec.md §4.3, §4.5): the off-side rule engine that
//! every block-shaped construct (class body, statement body, match-case
//! list) is built on.
//!
//! As with the rest of the core (see `state.rs`'s architecture note), this
//! is realized as a function a block-reading grammar function calls once
//! per source line rather than as a standalone reader object: the caller
//! already has a composite node open (`ClassDecl`, `StatementList`, ...)
//! and this function flushes each line's leading trivia straight into it,
//! then either hands back the first content character of the line or
//! reports that the block has ended.

use rowan::TextRange;

use crate::cst::SyntaxKind;
use crate::diagnostics::DiagnosticKind;
use crate::resolvers::identifier::{is_identifier_continue, is_identifier_start};
use crate::state::ReadingState;

pub enum LineStart {
    /// A content line begins at or above the threshold; its leading
    /// trivia has already been flushed to the caller's open node. `c` is
    /// the first non-trivia character of the line, not yet consumed. The
    /// line's measured indentation is also recorded on `state` (see
    /// `ReadingState::last_line_indent`) for whatever construct `c` turns
    /// out to start to seed a nested block's threshold from.
    Content(char),
    /// Indentation measured below the threshold: the block has ended.
    /// The entire leading sequence (and the first content char) has
    /// already been pushed back through the pushback channel — the
    /// caller should simply finish its node and return without consuming
    /// anything else.
    BlockEnd,
    /// Input ended while buffering a line's leading trivia. Whatever was
    /// buffered has already been flushed to the caller's open node as
    /// trailing trivia (spec.md §7 "unterminated construct at end of
    /// input").
    Eof,
}

/// Reads one line's worth of leading whitespace/comments/continuations,
/// comparing the measured indentation against `threshold`.
///
/// `first_line_relaxed`: when true, a content line is accepted
/// unconditionally regardless of measured indentation (spec.md §4.3
/// "First-line relaxation"), used for the root-level class body at
/// indentation 0.
pub fn begin_line(state: &mut ReadingState, threshold: u32, first_line_relaxed: bool) -> LineStart {
    let mut leading: Vec<(SyntaxKind, String)> = Vec::new();
    let mut measured: u32 = 0;
    let mut seen_space_this_line = false;

    loop {
        let Some(c) = state.peek() else {
            flush(state, &leading);
            return LineStart::Eof;
        };

        match c {
            ' ' => {
                let text = state.take_while(|c| c == ' ');
                measured += text.chars().count() as u32;
                seen_space_this_line = true;
                leading.push((SyntaxKind::Indentation, text));
            }
            '\t' => {
                let cost = state.settings.tab_spaces_cost();
                let start = state.offset();
                let text = state.take_while(|c| c == '\t');
                measured += text.chars().count() as u32 * cost;
                if seen_space_this_line {
                    state.diagnostics.report(
                        DiagnosticKind::MixedIndentation,
                        TextRange::new(start.into(), state.offset().into()),
                    );
                }
                leading.push((SyntaxKind::Indentation, text));
            }
            '\r' => {
                let text = state.advance().to_string();
                if state.settings.treat_cr_as_token {
                    leading.push((SyntaxKind::CarriageReturn, text));
                } else if let Some(last) = leading
                    .last_mut()
                    .filter(|(k, _)| *k == SyntaxKind::Whitespace)
                {
                    last.1.push_str(&text);
                } else {
                    leading.push((SyntaxKind::Whitespace, text));
                }
            }
            '\n' => {
                leading.push((SyntaxKind::Newline, state.advance().to_string()));
                measured = 0;
                seen_space_this_line = false;
            }
            '#' => {
                let mut text = String::from(state.advance());
                text.push_str(&state.take_while(|c| c != '\n'));
                leading.push((SyntaxKind::Comment, text));
            }
            '\\' => {
                state.advance();
                let mut text = String::from('\\');
                // Absorb the newline (and any preceding CR) as a line
                // continuation: it does not reset `measured`, and it does
                // not end line buffering the way a bare newline would.
                if state.peek() == Some('\r') {
                    text.push(state.advance());
                }
                if state.peek() == Some('\n') {
                    text.push(state.advance());
                }
                leading.push((SyntaxKind::LineContinuation, text));
            }
            c => {
                if first_line_relaxed || measured >= threshold {
                    flush(state, &leading);
                    state.set_last_line_indent(measured);
                    return LineStart::Content(c);
                }
                // Block ended: per spec.md §4.3 step 2, the *entire* leading
                // sequence and `c` are replayed through pushback as raw
                // characters (not flushed as already-built trivia tokens) so
                // the enclosing reader re-measures and re-tokenizes them
                // itself, attaching them to whichever owner they actually
                // belong to. Flushing here would wrongly attach this line's
                // trivia to whatever node this reader's caller had open.
                for (_, text) in &leading {
                    state.pass_string(text);
                }
                state.pass_char(c);
                return LineStart::BlockEnd;
            }
        }
    }
}

/// Non-destructively checks whether the upcoming line is a content line at
/// or above `threshold` whose first word is exactly one of `keywords` —
/// without committing a single byte of it to the builder or the real
/// cursor. Callers that need to decide whether the next line continues a
/// construct (an `elif`/`else` clause, a `set`/`get` accessor line) must
/// probe with this *before* calling `begin_line`: `begin_line` flushes a
/// content line's leading trivia unconditionally on the `Content` path, so
/// calling it speculatively and backing out on a negative result is not an
/// option once that trivia has reached the builder — there is no way to
/// later exclude it from whichever node the real parse goes on to wrap.
pub fn peek_clause_keyword(state: &ReadingState, threshold: u32, keywords: &[&str]) -> bool {
    let mut cursor = state.fork_cursor();
    let mut measured: u32 = 0;

    loop {
        let Some(c) = cursor.pull() else {
            return false;
        };

        match c {
            ' ' => measured += 1,
            '\t' => measured += cursor.tab_spaces_cost,
            '\r' => {}
            '\n' => measured = 0,
            '#' => {
                while let Some(c2) = cursor.peek() {
                    if c2 == '\n' {
                        break;
                    }
                    cursor.pull();
                }
            }
            '\\' => {
                if cursor.peek() == Some('\r') {
                    cursor.pull();
                }
                if cursor.peek() == Some('\n') {
                    cursor.pull();
                }
            }
            c if is_identifier_start(c) => {
                if measured < threshold {
                    return false;
                }
                let mut word = String::from(c);
                while cursor.peek().is_some_and(is_identifier_continue) {
                    word.push(cursor.pull().unwrap());
                }
                return keywords.contains(&word.as_str());
            }
            _ => return false,
        }
    }
}

fn flush(state: &mut ReadingState, leading: &[(SyntaxKind, String)]) {
    for (kind, text) in leading {
        state.token(*kind, text);
    }
}
