//! Path-specifier resolver (spec.md §4.4) for `$node/path` get-node
//! expressions and `@node/path` node-path expressions.

use crate::cst::SyntaxKind;
use crate::resolvers::identifier::read_identifier_run;
use crate::state::ReadingState;

use super::strings;

/// `$...` — fetches a node at runtime.
pub fn parse_get_node(state: &mut ReadingState) {
    state.start_node(SyntaxKind::GetNodeExpr);
    let dollar = state.advance().to_string();
    state.token(SyntaxKind::Dollar, &dollar);
    parse_path_body(state);
    state.finish_node();
}

/// `@...` — a node-path literal.
pub fn parse_node_path(state: &mut ReadingState) {
    state.start_node(SyntaxKind::NodePathExpr);
    let at = state.advance().to_string();
    state.token(SyntaxKind::At, &at);
    parse_path_body(state);
    state.finish_node();
}

fn parse_path_body(state: &mut ReadingState) {
    if strings::starts_string(state.peek().unwrap_or('\0')) {
        strings::parse_string(state, false);
        return;
    }
    parse_path_specifier(state);
    while state.peek() == Some('/') {
        let slash = state.advance().to_string();
        state.token(SyntaxKind::Slash, &slash);
        parse_path_specifier(state);
    }
}

/// One `/`-delimited segment: a run of leading dots (`.` = current node,
/// `..` = parent) optionally followed by identifier letters, or a bare
/// identifier.
fn parse_path_specifier(state: &mut ReadingState) {
    state.start_node(SyntaxKind::PathSpecifier);
    if state.peek() == Some('.') {
        let dots = state.take_while(|c| c == '.');
        state.token(SyntaxKind::Dot, &dots);
    }
    let ident = read_identifier_run(state);
    if !ident.is_empty() {
        state.token(SyntaxKind::Identifier, &ident);
    }
    state.finish_node();
}
