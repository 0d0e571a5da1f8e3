//! Statements resolver (spec.md §4.4): `if`/`elif`/`else`, `for`, `while`,
//! `match` (with cases), a variable-declaration statement, `return`,
//! `pass`, `continue`, `break`, and expression statements. Also owns
//! `parse_statement_list`, the indented-reader-driven block loop every
//! block-shaped construct (method bodies, loop/branch bodies, lambda
//! bodies, match cases) is built on.

use crate::cst::SyntaxKind::{self, *};
use crate::indent::{self, LineStart};
use crate::resolvers::identifier::{is_identifier_start, read_identifier_run};
use crate::state::ReadingState;
use crate::trivia::skip_inline_trivia;

use super::{expressions, members, types};

/// Reads one indented block of statements, starting at `threshold`, until
/// the block outdents or the input ends (spec.md §4.3). `first_line_relaxed`
/// is only meaningful for the very first line of the whole list (used for
/// the root-level class body; ordinary nested blocks pass `false`).
pub fn parse_statement_list(state: &mut ReadingState, threshold: u32, first_line_relaxed: bool) {
    state.start_node(StatementList);
    state.push_threshold(threshold);
    let mut relaxed = first_line_relaxed;
    loop {
        match indent::begin_line(state, threshold, relaxed) {
            LineStart::Content(_) => parse_statement(state),
            LineStart::BlockEnd | LineStart::Eof => break,
        }
        relaxed = false;
    }
    state.pop_threshold();
    state.finish_node();
}

/// Dispatches one statement at the current position (the leading
/// indentation of its line has already been consumed and flushed by the
/// caller's `begin_line`). Any content left on the same line after the
/// statement completes becomes an invalid token (spec.md §4.4 "Statements
/// resolver").
fn parse_statement(state: &mut ReadingState) {
    match state.peek() {
        Some(c) if is_identifier_start(c) => {
            let text = read_identifier_run(state);
            match text.as_str() {
                "if" => parse_if_stmt(state, &text),
                "for" => parse_for_stmt(state, &text),
                "while" => parse_while_stmt(state, &text),
                "match" => parse_match_stmt(state, &text),
                "var" => parse_var_decl_stmt(state, &text),
                "return" => parse_return_stmt_with_keyword(state, &text),
                "pass" => parse_simple_keyword_stmt(state, PassStmt, KwPass, &text),
                "continue" => parse_simple_keyword_stmt(state, ContinueStmt, KwContinue, &text),
                "break" => parse_simple_keyword_stmt(state, BreakStmt, KwBreak, &text),
                _ => {
                    state.pass_string(&text);
                    parse_expr_stmt(state);
                }
            }
        }
        Some(_) => parse_expr_stmt(state),
        None => return,
    }
    skip_trailing_same_line(state);
}

/// Consumes whatever is left on the current line after a statement
/// completes, as a single invalid-token run (spec.md §4.4).
pub(crate) fn skip_trailing_same_line(state: &mut ReadingState) {
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(|c| c != '\n' && c != '\r') {
        state.start_node(Invalid);
        state.emit_invalid_until(|c| c == '\n' || c == '\r');
        state.finish_node();
    }
}

pub(crate) fn parse_simple_keyword_stmt(
    state: &mut ReadingState,
    node: SyntaxKind,
    token: SyntaxKind,
    text: &str,
) {
    state.start_node(node);
    state.token(token, text);
    state.finish_node();
}

pub(crate) fn parse_return_stmt_with_keyword(state: &mut ReadingState, text: &str) {
    state.start_node(ReturnStmt);
    state.token(KwReturn, text);
    skip_inline_trivia(state, false);
    if state
        .peek()
        .is_some_and(|c| c != '\n' && c != '\r' && c != '#')
    {
        expressions::parse_expression(state, false);
    }
    state.finish_node();
}

fn parse_expr_stmt(state: &mut ReadingState) {
    state.start_node(ExprStmt);
    expressions::parse_expression(state, false);
    state.finish_node();
}

/// `if cond: body (elif cond: body)* (else: body)?`.
///
/// Node construction is deferred via checkpoints rather than an eager
/// `start_node(IfStmt)`: the true-branch, each `elif` clause and the final
/// `else` clause are built as flat siblings of whatever already-open node
/// contains this statement, and only wrapped into `IfStmt`/`ElifClause`/
/// `ElseClause` once we know how far the chain actually extends. Whether
/// the next line continues the chain is decided with
/// `indent::peek_clause_keyword`, which reads ahead without consuming
/// anything — only once it confirms the line starts with `elif`/`else` at
/// the right threshold does the loop call the committing
/// `indent::begin_line`. A sibling statement at the same indentation is
/// therefore never touched here; it is left for the enclosing
/// `parse_statement_list` to read on its own next iteration.
fn parse_if_stmt(state: &mut ReadingState, kw_text: &str) {
    let if_checkpoint = state.checkpoint();
    state.token(KwIf, kw_text);
    skip_inline_trivia(state, false);
    expressions::parse_expression(state, false);
    skip_inline_trivia(state, false);
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
    }
    let inner = state.last_line_indent() + 1;
    parse_statement_list(state, inner, false);

    loop {
        let outer = state.current_threshold();
        if !indent::peek_clause_keyword(state, outer, &["elif", "else"]) {
            break;
        }
        match indent::begin_line(state, outer, false) {
            LineStart::Content(c) if is_identifier_start(c) => {
                let text = read_identifier_run(state);
                match text.as_str() {
                    "elif" => {
                        let clause_checkpoint = state.checkpoint();
                        state.token(KwElif, &text);
                        skip_inline_trivia(state, false);
                        expressions::parse_expression(state, false);
                        skip_inline_trivia(state, false);
                        if state.peek() == Some(':') {
                            let colon = state.advance().to_string();
                            state.token(Colon, &colon);
                        }
                        let inner = state.last_line_indent() + 1;
                        parse_statement_list(state, inner, false);
                        state.start_node_at(clause_checkpoint, ElifClause);
                        state.finish_node();
                    }
                    "else" => {
                        let clause_checkpoint = state.checkpoint();
                        state.token(KwElse, &text);
                        skip_inline_trivia(state, false);
                        if state.peek() == Some(':') {
                            let colon = state.advance().to_string();
                            state.token(Colon, &colon);
                        }
                        let inner = state.last_line_indent() + 1;
                        parse_statement_list(state, inner, false);
                        state.start_node_at(clause_checkpoint, ElseClause);
                        state.finish_node();
                        break;
                    }
                    _ => unreachable!("peek_clause_keyword guaranteed elif/else"),
                }
            }
            _ => break,
        }
    }

    state.start_node_at(if_checkpoint, IfStmt);
    state.finish_node();
}

/// `for name[: Type] in expr: body`.
fn parse_for_stmt(state: &mut ReadingState, kw_text: &str) {
    state.start_node(ForStmt);
    state.token(KwFor, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(Identifier, &name);
    }
    skip_inline_trivia(state, false);
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
        skip_inline_trivia(state, false);
        if state.peek().is_some_and(is_identifier_start) {
            types::try_parse_type(state);
        }
        skip_inline_trivia(state, false);
    }
    if state.peek().is_some_and(is_identifier_start) {
        let text = read_identifier_run(state);
        if text == "in" {
            state.token(KwIn, &text);
        } else {
            state.pass_string(&text);
        }
    }
    skip_inline_trivia(state, false);
    expressions::parse_expression(state, false);
    skip_inline_trivia(state, false);
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
    }
    let inner = state.last_line_indent() + 1;
    parse_statement_list(state, inner, false);
    state.finish_node();
}

fn parse_while_stmt(state: &mut ReadingState, kw_text: &str) {
    state.start_node(WhileStmt);
    state.token(KwWhile, kw_text);
    skip_inline_trivia(state, false);
    expressions::parse_expression(state, false);
    skip_inline_trivia(state, false);
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
    }
    let inner = state.last_line_indent() + 1;
    parse_statement_list(state, inner, false);
    state.finish_node();
}

/// `match expr: (pattern(, pattern)*: body)*`. Cases are emitted directly
/// as `MatchCase` children of `MatchStmt` — spec.md §3.3 does not call out
/// a separate case-list wrapper node.
fn parse_match_stmt(state: &mut ReadingState, kw_text: &str) {
    state.start_node(MatchStmt);
    state.token(KwMatch, kw_text);
    skip_inline_trivia(state, false);
    expressions::parse_expression(state, false);
    skip_inline_trivia(state, false);
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
    }
    let threshold = state.last_line_indent() + 1;
    state.push_threshold(threshold);
    loop {
        match indent::begin_line(state, threshold, false) {
            LineStart::Content(_) => parse_match_case(state),
            LineStart::BlockEnd | LineStart::Eof => break,
        }
    }
    state.pop_threshold();
    state.finish_node();
}

fn parse_match_case(state: &mut ReadingState) {
    state.start_node(MatchCase);
    loop {
        expressions::parse_expression(state, false);
        skip_inline_trivia(state, false);
        if state.peek() == Some(',') {
            let comma = state.advance().to_string();
            state.token(Comma, &comma);
            skip_inline_trivia(state, false);
        } else {
            break;
        }
    }
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
    }
    let inner = state.last_line_indent() + 1;
    parse_statement_list(state, inner, false);
    state.finish_node();
}

fn parse_var_decl_stmt(state: &mut ReadingState, kw_text: &str) {
    state.start_node(VarDeclStmt);
    members::parse_var_decl_core(state, kw_text, None, false);
    state.finish_node();
}
