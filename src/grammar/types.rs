//! Type resolver (spec.md §4.4): reads a base type identifier, then any
//! `[...]` parametric suffix (`Array[T]`, including `Array[Array[T]]`).

use crate::cst::SyntaxKind;
use crate::receiver::Delivery;
use crate::resolvers::identifier::{is_identifier_start, read_identifier_run};
use crate::state::ReadingState;
use crate::trivia::skip_inline_trivia;

/// Attempts to parse a type reference. The current character must satisfy
/// [`is_identifier_start`]. `set` and `get` are never types — spec.md
/// §4.4 calls them out explicitly, since they are only meaningful as
/// property-accessor keywords — so encountering either bare identifier
/// declines the slot and replays the letters for the caller (typically
/// the set/get accessors resolver) to recognize instead.
pub fn try_parse_type(state: &mut ReadingState) -> Delivery<()> {
    debug_assert!(state.peek().is_some_and(is_identifier_start));
    let text = read_identifier_run(state);
    if text == "set" || text == "get" {
        state.pass_string(&text);
        return Delivery::Skip;
    }

    if state.peek() == Some('[') {
        state.start_node(SyntaxKind::ArrayTypeRef);
        state.token(SyntaxKind::Identifier, &text);
        let open = state.advance().to_string();
        state.token(SyntaxKind::LBracket, &open);
        skip_inline_trivia(state, true);
        if state.peek().is_some_and(is_identifier_start) {
            try_parse_type(state);
        }
        skip_inline_trivia(state, true);
        if state.peek() == Some(']') {
            let close = state.advance().to_string();
            state.token(SyntaxKind::RBracket, &close);
        }
        state.finish_node();
    } else {
        state.start_node(SyntaxKind::TypeRef);
        state.token(SyntaxKind::Identifier, &text);
        state.finish_node();
    }

    Delivery::Received(())
}
