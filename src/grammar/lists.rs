//! Comma-separated bracketed containers: array/dict literals, call
//! argument lists, and parameter lists all share the same "read an item,
//! then an optional comma, until the close bracket" shape.

use crate::cst::SyntaxKind;
use crate::resolvers::identifier::{is_identifier_start, read_identifier_run};
use crate::state::ReadingState;
use crate::trivia::skip_inline_trivia;

use super::{expressions, types};

/// Reads `open item (, item)* ,? close`, calling `parse_item` for each
/// element. Newlines inside the brackets are trivia, not terminators
/// (spec.md §4.4 "Honors newlines inside the outer `{...}`" — the same
/// holds for `[...]` and `(...)`).
pub fn parse_bracketed_list(
    state: &mut ReadingState,
    open_kind: SyntaxKind,
    close: char,
    close_kind: SyntaxKind,
    mut parse_item: impl FnMut(&mut ReadingState),
) {
    let open = state.advance().to_string();
    state.token(open_kind, &open);
    skip_inline_trivia(state, true);

    while state.peek().is_some_and(|c| c != close) {
        parse_item(state);
        skip_inline_trivia(state, true);
        if state.peek() == Some(',') {
            let comma = state.advance().to_string();
            state.token(SyntaxKind::Comma, &comma);
            skip_inline_trivia(state, true);
        } else {
            break;
        }
    }

    skip_inline_trivia(state, true);
    if state.peek() == Some(close) {
        let c = state.advance().to_string();
        state.token(close_kind, &c);
    }
}

/// One `key: value` pair inside a `{...}` dictionary literal (spec.md
/// §4.4 "Dictionary key-value resolver").
pub fn parse_dict_entry(state: &mut ReadingState) {
    state.start_node(SyntaxKind::DictEntry);
    expressions::parse_expression(state, true);
    skip_inline_trivia(state, true);
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(SyntaxKind::Colon, &colon);
        skip_inline_trivia(state, true);
        expressions::parse_expression(state, true);
    }
    state.finish_node();
}

/// One call argument: just an expression.
pub fn parse_arg(state: &mut ReadingState) {
    expressions::parse_expression(state, true);
}

/// One function/lambda parameter: `name[: Type][= default]` or
/// `name := default` (inferred type from the default).
pub fn parse_param(state: &mut ReadingState) {
    state.start_node(SyntaxKind::Param);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(SyntaxKind::Identifier, &name);
    }
    skip_inline_trivia(state, true);

    if state.peek() == Some(':') && state.peek2() == Some('=') {
        state.advance();
        state.advance();
        state.token(SyntaxKind::ColonEq, ":=");
        skip_inline_trivia(state, true);
        expressions::parse_expression(state, true);
    } else if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(SyntaxKind::Colon, &colon);
        skip_inline_trivia(state, true);
        if state.peek().is_some_and(is_identifier_start) {
            types::try_parse_type(state);
        }
        skip_inline_trivia(state, true);
        if state.peek() == Some('=') {
            let eq = state.advance().to_string();
            state.token(SyntaxKind::Assign, &eq);
            skip_inline_trivia(state, true);
            expressions::parse_expression(state, true);
        }
    } else if state.peek() == Some('=') {
        let eq = state.advance().to_string();
        state.token(SyntaxKind::Assign, &eq);
        skip_inline_trivia(state, true);
        expressions::parse_expression(state, true);
    }

    state.finish_node();
}

pub fn parse_param_list(state: &mut ReadingState) {
    state.start_node(SyntaxKind::ParamList);
    parse_bracketed_list(state, SyntaxKind::LParen, ')', SyntaxKind::RParen, parse_param);
    state.finish_node();
}
