//! Inline trivia: the whitespace/comment/continuation handling shared by
//! every grammar function that reads more than one token in a row
//! (expressions, parameter lists, type references, ...). This is distinct
//! from the indented reader's *leading*-sequence buffering in `indent.rs`
//! — here trivia is simply emitted straight onto whatever node is
//! currently open, mirroring the teacher parser's trivia-bumping loop.

use crate::cst::SyntaxKind;
use crate::state::ReadingState;

/// Consumes a run of inline trivia: spaces, CR, comments, and `\`
/// line-continuations. Newlines are only consumed (as trivia) when
/// `allow_newline` is set — e.g. inside `(...)`/`[...]`/`{...}`, where
/// GDScript permits a literal newline as whitespace. Outside brackets a
/// newline is left alone; it ends the enclosing statement/expression.
pub fn skip_inline_trivia(state: &mut ReadingState, allow_newline: bool) {
    loop {
        match state.peek() {
            Some(' ') => {
                let text = state.take_while(|c| c == ' ');
                state.token(SyntaxKind::Whitespace, &text);
            }
            Some('\t') => {
                let text = state.take_while(|c| c == '\t');
                state.token(SyntaxKind::Whitespace, &text);
            }
            Some('\r') => {
                let text = state.advance().to_string();
                if state.settings.treat_cr_as_token {
                    state.token(SyntaxKind::CarriageReturn, &text);
                } else {
                    state.token(SyntaxKind::Whitespace, &text);
                }
            }
            Some('#') => {
                let mut text = String::from(state.advance());
                text.push_str(&state.take_while(|c| c != '\n'));
                state.token(SyntaxKind::Comment, &text);
            }
            Some('\\') if matches!(state.peek2(), Some('\n') | Some('\r')) => {
                let mut text = String::from(state.advance());
                if state.peek() == Some('\r') {
                    text.push(state.advance());
                }
                if state.peek() == Some('\n') {
                    text.push(state.advance());
                }
                state.token(SyntaxKind::LineContinuation, &text);
            }
            Some('\n') if allow_newline => {
                let text = state.advance().to_string();
                state.token(SyntaxKind::Newline, &text);
            }
            _ => break,
        }
    }
}
