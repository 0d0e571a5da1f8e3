//! The symbolic half of the dual-operator resolver (spec.md §4.4). The
//! word-shaped members of the pattern set (`and or as is in not`) are
//! resolved at the identifier level instead — see `cst::keyword_from_str`
//! — so this table holds only the punctuation forms, longest first within
//! each length class as spec.md §4.2 prescribes for tie-breaking.

use crate::cst::SyntaxKind::{self, *};
use crate::receiver::Delivery;
use crate::state::ReadingState;

pub const OPERATOR_PATTERNS: &[(&str, SyntaxKind)] = &[
    ("**=", PowEq),
    ("<<=", ShlEq),
    (">>=", ShrEq),
    (">=", Ge),
    ("<=", Le),
    ("==", EqEq),
    ("/=", SlashEq),
    ("!=", NotEq),
    ("*=", StarEq),
    ("-=", MinusEq),
    ("+=", PlusEq),
    ("%=", PercentEq),
    ("<<", Shl),
    (">>", Shr),
    ("&=", AmpEq),
    ("|=", PipeEq),
    ("&&", AmpAmp),
    ("||", PipePipe),
    ("**", Pow),
    ("^=", CaretEq),
    ("=", Assign),
    ("<", Lt),
    (">", Gt),
    ("/", Slash),
    ("*", Star),
    ("+", Plus),
    ("-", Minus),
    ("%", Percent),
    ("^", Caret),
    ("|", Pipe),
    ("&", Amp),
    ("!", Bang),
    ("~", Tilde),
];

/// Runs the longest-match pattern resolver over [`OPERATOR_PATTERNS`].
pub fn match_operator(state: &mut ReadingState) -> Delivery<(String, SyntaxKind)> {
    super::pattern::match_longest(state, OPERATOR_PATTERNS)
}
