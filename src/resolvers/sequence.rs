//! Sequence resolver (spec.md §4.2): matches one fixed target string
//! against the stream, character by character.

use crate::state::ReadingState;

/// Tries to consume exactly `target` from the stream. On a full match,
/// `target`'s bytes are consumed and `true` is returned. On a mismatch (or
/// EOF before the sequence completes), the matched prefix is pushed back
/// — the offending character, not yet consumed, is left for the next
/// reader to see untouched — and `false` is returned.
///
/// A newline mid-sequence is treated like any other non-matching
/// character (spec.md §4.2 "On newline, treat as a non-match char").
pub fn match_sequence(state: &mut ReadingState, target: &str) -> bool {
    let mut matched = String::new();
    for expected in target.chars() {
        match state.peek() {
            Some(c) if c == expected => matched.push(state.advance()),
            _ => {
                if !matched.is_empty() {
                    state.pass_string(&matched);
                }
                return false;
            }
        }
    }
    true
}
