//! String-part resolver and string node construction (spec.md §3.4, §4.4).

use rowan::TextRange;

use crate::cst::{token_sets, SyntaxKind};
use crate::diagnostics::DiagnosticKind;
use crate::state::ReadingState;

/// True if the current character starts a quote bounder (`'` or `"`).
pub fn starts_string(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Parses a string expression. The cursor must be positioned at the
/// opening bounder; `raw` indicates an `r` prefix (already emitted by the
/// caller) was seen, disabling escape processing.
pub fn parse_string(state: &mut ReadingState, raw: bool) {
    state.start_node(SyntaxKind::StringExpr);
    if raw {
        state.token(SyntaxKind::RawPrefix, "r");
    }

    let quote_char = state.peek().expect("caller checked starts_string");
    let triple = state.peek2() == Some(quote_char) && state.peek3() == Some(quote_char);
    let opening: String = if triple {
        let mut s = String::new();
        s.push(state.advance());
        s.push(state.advance());
        s.push(state.advance());
        s
    } else {
        state.advance().to_string()
    };
    state.token(SyntaxKind::Quote, &opening);

    let mut part = String::new();
    let mut closed = false;

    loop {
        let Some(c) = state.peek() else { break };

        if c == quote_char {
            if !triple {
                flush_part(state, &mut part);
                state.token(SyntaxKind::Quote, &state.advance().to_string());
                closed = true;
                break;
            }
            let mut run = String::new();
            while run.chars().count() < 3 && state.peek() == Some(quote_char) {
                run.push(state.advance());
            }
            if run.chars().count() == 3 {
                flush_part(state, &mut part);
                state.token(SyntaxKind::Quote, &run);
                closed = true;
                break;
            }
            part.push_str(&run);
            continue;
        }

        if (c == '\n' || c == '\r') && !triple {
            // Closes the part and ends the string here; the newline is
            // left for the enclosing reader (spec.md §4.4).
            break;
        }

        if c == '\\' && !raw {
            flush_part(state, &mut part);
            let backslash_start = state.offset();
            state.advance();
            match state.peek() {
                Some(e) if token_sets::STRING_ESCAPES.contains(&e) => {
                    state.advance();
                    state.token(SyntaxKind::Escape, &format!("\\{e}"));
                }
                _ => {
                    state.pass_char('\\');
                    state.diagnostics.report(
                        DiagnosticKind::MalformedEscape,
                        TextRange::new(backslash_start.into(), state.offset().into()),
                    );
                    // Closed by the malformed escape, not by running out of
                    // input — `UnterminatedAtEof` below does not apply here.
                    state.finish_node();
                    return;
                }
            }
            continue;
        }

        part.push(state.advance());
    }

    flush_part(state, &mut part);
    if !closed {
        let at = state.offset();
        state
            .diagnostics
            .report(DiagnosticKind::UnterminatedAtEof, TextRange::new(at.into(), at.into()));
    }
    state.finish_node();
}

fn flush_part(state: &mut ReadingState, part: &mut String) {
    if !part.is_empty() {
        state.token(SyntaxKind::StringPart, part);
        part.clear();
    }
}

