//! Identifier reading. GDScript identifiers match `[A-Za-z_][A-Za-z0-9_]*`;
//! keywords and word-shaped keyword-operators (`and`, `or`, `not`, `as`,
//! `is`, `in`, ...) are recognized by reading the whole run first and
//! looking it up, never by partial character matching (see
//! `cst::keyword_from_str`'s doc comment for why).

pub fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

pub fn is_identifier_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

use crate::state::ReadingState;

/// Reads a maximal identifier run. Caller must have already checked that
/// the current character satisfies [`is_identifier_start`].
pub fn read_identifier_run(state: &mut ReadingState) -> String {
    state.take_while(is_identifier_continue)
}
