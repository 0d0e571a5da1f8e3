//! Number reading (spec.md §3.2): integer, float, hexadecimal, binary and
//! scientific forms, with `_` digit-group separators throughout.

use crate::state::ReadingState;

fn is_digit_or_sep(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

fn is_hex_or_sep(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '_'
}

/// Reads a maximal number run. Caller must have already checked that the
/// current character is either an ASCII digit or a `.` followed by one
/// (the leading-dot float form, `.5`).
pub fn read_number(state: &mut ReadingState) -> String {
    let mut out = String::new();

    if state.peek() == Some('.') {
        out.push(state.advance());
        out.push_str(&state.take_while(is_digit_or_sep));
        push_exponent(state, &mut out);
        return out;
    }

    if state.peek() == Some('0') {
        let lookahead = state.peek2();
        if matches!(lookahead, Some('x') | Some('X')) {
            out.push(state.advance());
            out.push(state.advance());
            out.push_str(&state.take_while(is_hex_or_sep));
            return out;
        }
        if matches!(lookahead, Some('b') | Some('B')) {
            out.push(state.advance());
            out.push(state.advance());
            out.push_str(&state.take_while(|c| c == '0' || c == '1' || c == '_'));
            return out;
        }
    }

    out.push_str(&state.take_while(is_digit_or_sep));

    if state.peek() == Some('.') && state.peek2().is_some_and(|c| c.is_ascii_digit()) {
        out.push(state.advance());
        out.push_str(&state.take_while(is_digit_or_sep));
    }

    push_exponent(state, &mut out);

    out
}

// `e`/`E` starts an exponent only when followed by a digit or a sign; a
// bare trailing `e` (as in the identifier `e`) is left alone.
fn push_exponent(state: &mut ReadingState, out: &mut String) {
    if matches!(state.peek(), Some('e') | Some('E')) {
        let starts_exponent = matches!(state.peek2(), Some(c) if c.is_ascii_digit() || c == '+' || c == '-');
        if starts_exponent {
            out.push(state.advance());
            if matches!(state.peek(), Some('+') | Some('-')) {
                out.push(state.advance());
            }
            out.push_str(&state.take_while(is_digit_or_sep));
        }
    }
}
