//! Pattern resolver (spec.md §4.2): picks the longest of many fixed
//! patterns that exactly matches an accumulating buffer, used for
//! GDScript's dual-character (and triple-character) operators where a
//! shorter operator is always a prefix of a longer one (`*`, `**`, `**=`).

use crate::cst::SyntaxKind;
use crate::receiver::Delivery;
use crate::state::ReadingState;

/// Grows `buffer` one character at a time as long as some pattern at
/// least as long as the tentative buffer still starts with it, tracking
/// the longest *exact* match seen along the way. Stops at the first
/// character that cannot extend any pattern, at a trivia-shaped
/// terminator (newline, `#`, `\`, CR), or at EOF.
///
/// Any characters consumed while speculatively exploring a longer pattern
/// that did not ultimately complete are pushed back, so a caller never
/// sees more consumed than the winning match (spec.md §8: `**=` wins over
/// `**` followed by `=`).
pub fn match_longest(
    state: &mut ReadingState,
    patterns: &[(&str, SyntaxKind)],
) -> Delivery<(String, SyntaxKind)> {
    let mut buffer = String::new();
    let mut best: Option<(usize, SyntaxKind)> = None;

    loop {
        if let Some((_, kind)) = patterns.iter().find(|(p, _)| **p == buffer) {
            best = Some((buffer.chars().count(), *kind));
        }
        let Some(c) = state.peek() else { break };
        if matches!(c, '\n' | '\r' | '#' | '\\') {
            break;
        }
        let mut extended = buffer.clone();
        extended.push(c);
        let can_continue = patterns
            .iter()
            .any(|(p, _)| p.len() >= extended.len() && p.starts_with(extended.as_str()));
        if !can_continue {
            break;
        }
        state.advance();
        buffer = extended;
    }

    match best {
        Some((len, kind)) => {
            let matched: String = buffer.chars().take(len).collect();
            let leftover: String = buffer.chars().skip(len).collect();
            if !leftover.is_empty() {
                state.pass_string(&leftover);
            }
            Delivery::Received((matched, kind))
        }
        None => {
            if !buffer.is_empty() {
                state.pass_string(&buffer);
            }
            Delivery::Skip
        }
    }
}
