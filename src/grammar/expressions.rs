//! Expression resolver (spec.md §4.4): a precedence-climbing ("Pratt")
//! reader. Every expression kind spec.md's "Node categories" (§3.3) lists
//! is built here: identifier, number, string, bool/null/self/super,
//! array/dictionary initializer, bracket, call, indexer, member-operator,
//! single-operator, dual-operator, ternary `if`, get-node, node-path,
//! variable-declaration-expression, lambda, preload, await, yield.
//!
//! Rather than spec.md §4.4's literal "swap the current expression into
//! the left slot of a new node, making the new node current" (which, taken
//! at face value, would left-associate every operator regardless of its
//! precedence), this builds the precedence-correct tree the standard way:
//! a checkpoint is taken before the left operand, and `start_node_at`
//! retroactively wraps it once the right operand (parsed at a tighter
//! minimum binding power) is known. This is the exact `rowan` trick the
//! teacher uses for quantifier wrapping in `parser/grammar.rs`
//! (`parse_quantifier`), generalized from a fixed postfix set to a full
//! binding-power table — see spec.md §8 scenario 2 (`a + b * c`) and the
//! `**=` vs `**`/`=` tie-break in §8's boundary behaviors.

use crate::cst::SyntaxKind::*;
use crate::cst::keyword_from_str;
use crate::resolvers::identifier::{is_identifier_start, read_identifier_run};
use crate::resolvers::operator::match_operator;
use crate::state::ReadingState;
use crate::trivia::skip_inline_trivia;

use super::{lists, paths, statements, strings, types};

/// Parses one expression into whatever node is currently open. `allow_newline`
/// controls whether a literal newline is trivia (inside `(...)`/`[...]`/`{...}`)
/// or a terminator (everywhere else) — spec.md §4.4's bracketed containers vs.
/// top-level statement expressions.
pub fn parse_expression(state: &mut ReadingState, allow_newline: bool) {
    if !state.enter_recursion() {
        state.start_node(Invalid);
        state.emit_invalid_until(|c| is_stop_char(c) || c == '\n');
        state.finish_node();
        return;
    }
    parse_expr_bp(state, 0, allow_newline);
    state.exit_recursion();
}

fn is_stop_char(c: char) -> bool {
    matches!(c, ',' | '}' | ')' | ']' | ':' | ';')
}

/// Peeks whether the current position starts an identifier run that is a
/// recognized keyword. If the run is a keyword, it is consumed and
/// returned; otherwise the whole run is pushed back untouched (pure peek).
fn peek_keyword(state: &mut ReadingState) -> Option<(String, SyntaxKind)> {
    if !state.peek().is_some_and(is_identifier_start) {
        return None;
    }
    let text = read_identifier_run(state);
    match keyword_from_str(&text) {
        Some(kind) => Some((text, kind)),
        None => {
            state.pass_string(&text);
            None
        }
    }
}

/// `(left_bp, right_bp)` for infix operators; `None` means "not infix".
/// Higher binds tighter. Right-associative operators (assignment, `**`)
/// have `right_bp < left_bp`.
fn infix_binding_power(kind: SyntaxKind) -> Option<(u8, u8)> {
    Some(match kind {
        Assign | PlusEq | MinusEq | StarEq | SlashEq | PercentEq | PowEq | ShlEq | ShrEq
        | AmpEq | PipeEq | CaretEq => (2, 1),
        KwOr | PipePipe => (3, 4),
        KwAnd | AmpAmp => (5, 6),
        KwIn | KwIs | KwAs | Lt | Gt | Le | Ge | EqEq | NotEq => (7, 8),
        Pipe => (9, 10),
        Caret => (11, 12),
        Amp => (13, 14),
        Shl | Shr => (15, 16),
        Plus | Minus => (17, 18),
        Star | Slash | Percent => (19, 20),
        Pow => (24, 23),
        _ => return None,
    })
}

/// Binding power a unary prefix operator parses its operand at. Binds
/// tighter than the multiplicative tier but looser than `**`, matching
/// ordinary `-2 ** 2 == -(2 ** 2)` precedence.
const UNARY_BP: u8 = 21;
/// Binding power the ternary `if`/`else` is recognized at — the loosest of
/// all, binding only looser than assignment.
const TERNARY_BP: u8 = 1;

fn parse_expr_bp(state: &mut ReadingState, min_bp: u8, allow_newline: bool) {
    let checkpoint = state.checkpoint();
    parse_prefix(state, allow_newline);
    parse_postfix_chain(state, checkpoint, allow_newline);

    loop {
        skip_inline_trivia(state, allow_newline);
        let Some(c) = state.peek() else { break };
        if is_stop_char(c) {
            break;
        }

        if is_identifier_start(c) {
            let Some((text, kind)) = peek_keyword(state) else {
                break;
            };
            match kind {
                KwIf => {
                    if TERNARY_BP < min_bp {
                        state.pass_string(&text);
                        break;
                    }
                    state.token(KwIf, "if");
                    skip_inline_trivia(state, allow_newline);
                    parse_expr_bp(state, 0, allow_newline);
                    skip_inline_trivia(state, allow_newline);
                    match peek_keyword(state) {
                        Some((else_text, KwElse)) => {
                            state.token(KwElse, &else_text);
                            skip_inline_trivia(state, allow_newline);
                            parse_expr_bp(state, 0, allow_newline);
                        }
                        Some((other, _)) => state.pass_string(&other),
                        None => {}
                    }
                    state.start_node_at(checkpoint, IfExpr);
                    state.finish_node();
                }
                KwAnd | KwOr | KwIn | KwIs | KwAs => {
                    let (lhs_bp, rhs_bp) = infix_binding_power(kind).expect("checked above");
                    if lhs_bp < min_bp {
                        state.pass_string(&text);
                        break;
                    }
                    state.token(kind, &text);
                    skip_inline_trivia(state, allow_newline);
                    parse_expr_bp(state, rhs_bp, allow_newline);
                    state.start_node_at(checkpoint, BinaryExpr);
                    state.finish_node();
                }
                _ => {
                    // `else`, `setget`, or any other keyword: not part of
                    // this expression, terminate and push back (spec.md
                    // §4.4 "if/else/setget terminate the expression").
                    state.pass_string(&text);
                    break;
                }
            }
            continue;
        }

        if is_operator_start(c) {
            match match_operator(state) {
                crate::receiver::Delivery::Received((text, kind)) => {
                    let Some((lhs_bp, rhs_bp)) = infix_binding_power(kind) else {
                        state.pass_string(&text);
                        break;
                    };
                    if lhs_bp < min_bp {
                        state.pass_string(&text);
                        break;
                    }
                    state.token(kind, &text);
                    skip_inline_trivia(state, allow_newline);
                    parse_expr_bp(state, rhs_bp, allow_newline);
                    state.start_node_at(checkpoint, BinaryExpr);
                    state.finish_node();
                }
                crate::receiver::Delivery::Skip => break,
            }
            continue;
        }

        break;
    }
}

fn is_operator_start(c: char) -> bool {
    matches!(
        c,
        '=' | '<' | '>' | '/' | '*' | '+' | '-' | '%' | '^' | '|' | '&' | '!' | '~'
    )
}

fn parse_prefix(state: &mut ReadingState, allow_newline: bool) {
    let Some(c) = state.peek() else {
        state.start_node(Invalid);
        state.finish_node();
        return;
    };

    match c {
        '(' => {
            state.start_node(BracketExpr);
            let open = state.advance().to_string();
            state.token(LParen, &open);
            skip_inline_trivia(state, true);
            if state.peek() != Some(')') {
                parse_expression(state, true);
            }
            skip_inline_trivia(state, true);
            if state.peek() == Some(')') {
                let close = state.advance().to_string();
                state.token(RParen, &close);
            }
            state.finish_node();
        }
        '[' => {
            state.start_node(ArrayExpr);
            lists::parse_bracketed_list(state, LBracket, ']', RBracket, lists::parse_arg);
            state.finish_node();
        }
        '{' => {
            state.start_node(DictExpr);
            lists::parse_bracketed_list(state, LBrace, '}', RBrace, lists::parse_dict_entry);
            state.finish_node();
        }
        '\'' | '"' => strings::parse_string(state, false),
        c if c.is_ascii_digit() => {
            state.start_node(NumberExpr);
            let text = crate::resolvers::number::read_number(state);
            state.token(Number, &text);
            state.finish_node();
        }
        '@' => paths::parse_node_path(state),
        '$' => paths::parse_get_node(state),
        '.' if state.peek2().is_some_and(|c| c.is_ascii_digit()) => {
            state.start_node(NumberExpr);
            let text = crate::resolvers::number::read_number(state);
            state.token(Number, &text);
            state.finish_node();
        }
        '.' => {
            state.start_node(MemberExpr);
            let dot = state.advance().to_string();
            state.token(Dot, &dot);
            if state.peek().is_some_and(is_identifier_start) {
                let ident = read_identifier_run(state);
                state.token(Identifier, &ident);
            }
            state.finish_node();
        }
        '-' | '!' | '~' => {
            state.start_node(UnaryExpr);
            let kind = match c {
                '-' => Minus,
                '!' => Bang,
                _ => Tilde,
            };
            let text = state.advance().to_string();
            state.token(kind, &text);
            parse_expr_bp(state, UNARY_BP, allow_newline);
            state.finish_node();
        }
        c if is_identifier_start(c) => parse_identifier_led(state, allow_newline),
        _ => {
            state.start_node(Invalid);
            state.emit_invalid_until(|c| is_stop_char(c) || c == '\n');
            state.finish_node();
        }
    }
}

fn parse_identifier_led(state: &mut ReadingState, allow_newline: bool) {
    let text = read_identifier_run(state);

    // `r'...'` / `r"..."` raw string prefix: only when the run is exactly
    // `r` and a quote immediately follows (spec.md §3.2, §3.4).
    if text == "r" && state.peek().is_some_and(strings::starts_string) {
        strings::parse_string(state, true);
        return;
    }

    match keyword_from_str(&text) {
        Some(KwTrue) | Some(KwFalse) => {
            state.start_node(BoolExpr);
            state.token(
                if text == "true" { KwTrue } else { KwFalse },
                &text,
            );
            state.finish_node();
        }
        Some(KwNull) => {
            state.start_node(NullExpr);
            state.token(KwNull, &text);
            state.finish_node();
        }
        Some(KwSelf) => {
            state.start_node(SelfExpr);
            state.token(KwSelf, &text);
            state.finish_node();
        }
        Some(KwSuper) => {
            state.start_node(SuperExpr);
            state.token(KwSuper, &text);
            skip_inline_trivia(state, allow_newline);
            if state.peek() == Some('(') {
                parse_call_args(state);
            }
            state.finish_node();
        }
        Some(KwNot) => {
            state.start_node(UnaryExpr);
            state.token(KwNot, &text);
            skip_inline_trivia(state, allow_newline);
            parse_expr_bp(state, UNARY_BP, allow_newline);
            state.finish_node();
        }
        Some(KwVar) => {
            state.start_node(VarDeclExpr);
            state.token(KwVar, &text);
            skip_inline_trivia(state, allow_newline);
            if state.peek().is_some_and(is_identifier_start) {
                let name = read_identifier_run(state);
                state.token(Identifier, &name);
            }
            state.finish_node();
        }
        Some(KwPass) => statements::parse_simple_keyword_stmt(state, PassStmt, KwPass, &text),
        Some(KwContinue) => {
            statements::parse_simple_keyword_stmt(state, ContinueStmt, KwContinue, &text)
        }
        Some(KwReturn) => statements::parse_return_stmt_with_keyword(state, &text),
        Some(KwPreload) => {
            state.start_node(PreloadExpr);
            state.token(KwPreload, &text);
            skip_inline_trivia(state, allow_newline);
            if state.peek() == Some('(') {
                parse_call_args(state);
            }
            state.finish_node();
        }
        Some(KwAwait) => {
            state.start_node(AwaitExpr);
            state.token(KwAwait, &text);
            skip_inline_trivia(state, allow_newline);
            parse_expr_bp(state, UNARY_BP, allow_newline);
            state.finish_node();
        }
        Some(KwYield) => {
            state.start_node(YieldExpr);
            state.token(KwYield, &text);
            skip_inline_trivia(state, allow_newline);
            if state.peek() == Some('(') {
                parse_call_args(state);
            }
            state.finish_node();
        }
        Some(KwFunc) => parse_lambda(state, &text),
        _ => {
            state.start_node(IdentifierExpr);
            state.token(Identifier, &text);
            state.finish_node();
        }
    }
}

/// Function literal (spec.md §F): `func [name](params) [-> Type]: body`.
/// Reuses the method declaration's parameter-list/return-type/body
/// grammar rather than duplicating it ("Keep HOW, replace WHAT").
fn parse_lambda(state: &mut ReadingState, kw_text: &str) {
    state.start_node(LambdaExpr);
    state.token(KwFunc, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(Identifier, &name);
        skip_inline_trivia(state, false);
    }
    if state.peek() == Some('(') {
        lists::parse_param_list(state);
    }
    skip_inline_trivia(state, false);
    if state.peek() == Some('-') && state.peek2() == Some('>') {
        state.advance();
        state.advance();
        state.token(Arrow, "->");
        skip_inline_trivia(state, false);
        if state.peek().is_some_and(is_identifier_start) {
            types::try_parse_type(state);
        }
    }
    skip_inline_trivia(state, false);
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
    }
    let threshold = state.current_threshold() + 1;
    statements::parse_statement_list(state, threshold, false);
    state.finish_node();
}

fn parse_postfix_chain(state: &mut ReadingState, checkpoint: rowan::Checkpoint, allow_newline: bool) {
    loop {
        match state.peek() {
            Some('(') => {
                state.start_node_at(checkpoint, CallExpr);
                parse_call_args(state);
                state.finish_node();
            }
            Some('[') => {
                state.start_node_at(checkpoint, IndexExpr);
                lists::parse_bracketed_list(state, LBracket, ']', RBracket, |s| {
                    parse_expression(s, true)
                });
                state.finish_node();
            }
            Some('.') => {
                state.start_node_at(checkpoint, MemberExpr);
                let dot = state.advance().to_string();
                state.token(Dot, &dot);
                skip_inline_trivia(state, allow_newline);
                if state.peek().is_some_and(is_identifier_start) {
                    let ident = read_identifier_run(state);
                    state.token(Identifier, &ident);
                }
                state.finish_node();
            }
            _ => break,
        }
    }
}

fn parse_call_args(state: &mut ReadingState) {
    state.start_node(ArgList);
    lists::parse_bracketed_list(state, LParen, ')', RParen, lists::parse_arg);
    state.finish_node();
}
