//! Set/get accessors resolver (spec.md §4.4): recognizes `setget` (the
//! GDScript 3 form: same line as the declaration, `setget setter_name,
//! getter_name`) and the GDScript 4 form — a trailing `:` after the
//! declaration's initializer opens an indented block, each line of which
//! is a `set`/`get` accessor, either a body (optionally taking the new
//! value as a parameter) or an `= method_name` alias — producing one of
//! the four accessor-declaration node kinds. A keyword that doesn't match
//! declines the slot and replays the buffered characters (spec.md §4.4).

use crate::cst::SyntaxKind::*;
use crate::indent::{self, LineStart};
use crate::resolvers::identifier::{is_identifier_start, read_identifier_run};
use crate::state::ReadingState;
use crate::trivia::skip_inline_trivia;

use super::statements;

pub fn try_parse_accessors(state: &mut ReadingState) {
    if state.peek().is_some_and(is_identifier_start) {
        let text = read_identifier_run(state);
        if text == "setget" {
            parse_legacy_setget(state, &text);
            return;
        }
        state.pass_string(&text);
    }

    if state.peek() != Some(':') {
        return;
    }
    let colon = state.advance().to_string();
    state.token(Colon, &colon);

    let threshold = state.current_threshold() + 1;
    state.push_threshold(threshold);
    loop {
        if !indent::peek_clause_keyword(state, threshold, &["set", "get"]) {
            break;
        }
        match indent::begin_line(state, threshold, false) {
            LineStart::Content(c) if is_identifier_start(c) => {
                let text = read_identifier_run(state);
                match text.as_str() {
                    "set" => parse_set_accessor(state, &text),
                    "get" => parse_get_accessor(state, &text),
                    _ => unreachable!("peek_clause_keyword guaranteed set/get"),
                }
                statements::skip_trailing_same_line(state);
            }
            _ => break,
        }
    }
    state.pop_threshold();
}

fn parse_legacy_setget(state: &mut ReadingState, kw_text: &str) {
    state.token(KwSetget, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let setter = read_identifier_run(state);
        state.token(Identifier, &setter);
    }
    skip_inline_trivia(state, false);
    if state.peek() == Some(',') {
        let comma = state.advance().to_string();
        state.token(Comma, &comma);
        skip_inline_trivia(state, false);
        if state.peek().is_some_and(is_identifier_start) {
            let getter = read_identifier_run(state);
            state.token(Identifier, &getter);
        }
    }
}

fn parse_set_accessor(state: &mut ReadingState, kw_text: &str) {
    skip_inline_trivia(state, false);
    if state.peek() == Some('=') {
        state.start_node(AccessorSetAlias);
        state.token(KwSet, kw_text);
        let eq = state.advance().to_string();
        state.token(Assign, &eq);
        skip_inline_trivia(state, false);
        if state.peek().is_some_and(is_identifier_start) {
            let name = read_identifier_run(state);
            state.token(Identifier, &name);
        }
        state.finish_node();
        return;
    }

    state.start_node(AccessorSetBody);
    state.token(KwSet, kw_text);
    skip_inline_trivia(state, false);
    if state.peek() == Some('(') {
        let open = state.advance().to_string();
        state.token(LParen, &open);
        skip_inline_trivia(state, true);
        if state.peek().is_some_and(is_identifier_start) {
            let param = read_identifier_run(state);
            state.token(Identifier, &param);
        }
        skip_inline_trivia(state, true);
        if state.peek() == Some(')') {
            let close = state.advance().to_string();
            state.token(RParen, &close);
        }
        skip_inline_trivia(state, false);
    }
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
        let threshold = state.current_threshold() + 1;
        statements::parse_statement_list(state, threshold, false);
    }
    state.finish_node();
}

fn parse_get_accessor(state: &mut ReadingState, kw_text: &str) {
    skip_inline_trivia(state, false);
    if state.peek() == Some('=') {
        state.start_node(AccessorGetAlias);
        state.token(KwGet, kw_text);
        let eq = state.advance().to_string();
        state.token(Assign, &eq);
        skip_inline_trivia(state, false);
        if state.peek().is_some_and(is_identifier_start) {
            let name = read_identifier_run(state);
            state.token(Identifier, &name);
        }
        state.finish_node();
        return;
    }

    state.start_node(AccessorGetBody);
    state.token(KwGet, kw_text);
    skip_inline_trivia(state, false);
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
        let threshold = state.current_threshold() + 1;
        statements::parse_statement_list(state, threshold, false);
    }
    state.finish_node();
}
