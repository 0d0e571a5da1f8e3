//! Class-members resolver (spec.md §4.4): the top-level and per-`class`
//! declaration body. Recognizes `@` attributes, `class_name`, `extends`,
//! `tool`, `signal`, `enum`, `static` (wired onto the following `var`/`func`
//! if legal), `func`, `const`, `var`, and nested `class`.

use crate::cst::SyntaxKind::*;
use crate::indent::{self, LineStart};
use crate::resolvers::identifier::{is_identifier_start, read_identifier_run};
use crate::state::ReadingState;
use crate::trivia::skip_inline_trivia;

use super::statements::skip_trailing_same_line;
use super::{accessors, expressions, lists, statements, strings, types};

/// Reads one indented class body: `@`-attributes, declarations, and
/// nested classes, until the block outdents or input ends. The caller
/// (the root entrypoint, or `parse_inner_class_decl` below) owns the
/// enclosing `ClassDecl`/`InnerClassDecl` node.
pub fn parse_class_body(state: &mut ReadingState, threshold: u32, first_line_relaxed: bool) {
    state.push_threshold(threshold);
    let mut relaxed = first_line_relaxed;
    loop {
        match indent::begin_line(state, threshold, relaxed) {
            LineStart::Content(_) => parse_member(state),
            LineStart::BlockEnd | LineStart::Eof => break,
        }
        relaxed = false;
    }
    state.pop_threshold();
}

fn parse_member(state: &mut ReadingState) {
    match state.peek() {
        Some('@') => {
            // `@export var x := 1` is the standard GDScript 4 shape: the
            // annotation and the declaration it modifies sit on the same
            // line (spec.md §3.2's `@icon`/`@export`/`@onready` forms).
            // Recurse into the rest of the line as an ordinary member
            // rather than letting the shared trailing-content check below
            // swallow it as invalid.
            parse_annotation(state);
            skip_inline_trivia(state, false);
            if state.peek().is_some_and(is_identifier_start) {
                parse_member(state);
            } else {
                skip_trailing_same_line(state);
            }
            return;
        }
        Some(c) if is_identifier_start(c) => {
            let text = read_identifier_run(state);
            match text.as_str() {
                "class_name" => parse_class_name_attr(state, &text),
                "extends" => parse_extends_attr(state, &text),
                "tool" => parse_tool_attr(state, &text),
                "signal" => parse_signal_decl(state, &text),
                "enum" => parse_enum_decl(state, &text),
                "const" => parse_const_decl(state, &text),
                "var" => {
                    state.start_node(VarDecl);
                    parse_var_decl_core(state, &text, None, true);
                    state.finish_node();
                }
                "class" => parse_inner_class_decl(state, &text),
                "static" => {
                    let checkpoint = state.checkpoint();
                    parse_static_modifier(state, checkpoint, &text);
                }
                "func" => {
                    state.start_node(FuncDecl);
                    parse_func_decl_core(state, &text, None);
                    state.finish_node();
                }
                _ => {
                    state.pass_string(&text);
                    state.start_node(Invalid);
                    state.emit_invalid_until(|c| c == '\n' || c == '\r');
                    state.finish_node();
                }
            }
        }
        _ => {
            state.start_node(Invalid);
            state.emit_invalid_until(|c| c == '\n' || c == '\r');
            state.finish_node();
        }
    }
    skip_trailing_same_line(state);
}

/// A bare `static` is only legal immediately before `var` or `func`
/// (spec.md §4.4): "wires `static` as a modifier onto the following
/// declaration if present and legal." Anything else reports the whole
/// run as invalid, losing no bytes.
///
/// `checkpoint` is taken by the caller before `static` itself was read,
/// since which node ends up owning it (`VarDecl`, `FuncDecl`, or
/// `Invalid`) isn't known until the following word is inspected. The
/// `KwStatic` token is emitted immediately, ahead of the inline trivia
/// that follows it, so builder-call order always matches source order —
/// `start_node_at` only fixes up node *ownership* retroactively, not the
/// order tokens were added in.
fn parse_static_modifier(state: &mut ReadingState, checkpoint: rowan::Checkpoint, kw_text: &str) {
    state.token(KwStatic, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let text = read_identifier_run(state);
        match text.as_str() {
            "var" => {
                parse_var_decl_core(state, &text, None, true);
                state.start_node_at(checkpoint, VarDecl);
                state.finish_node();
                return;
            }
            "func" => {
                parse_func_decl_core(state, &text, None);
                state.start_node_at(checkpoint, FuncDecl);
                state.finish_node();
                return;
            }
            _ => {
                state.pass_string(&text);
            }
        }
    }
    state.start_node_at(checkpoint, Invalid);
    state.emit_invalid_until(|c| c == '\n' || c == '\r');
    state.finish_node();
}

fn parse_annotation(state: &mut ReadingState) {
    state.start_node(AnnotationAttr);
    let at = state.advance().to_string();
    state.token(At, &at);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(AnnotationName, &name);
    }
    skip_inline_trivia(state, false);
    if state.peek() == Some('(') {
        state.start_node(ArgList);
        lists::parse_bracketed_list(state, LParen, ')', RParen, lists::parse_arg);
        state.finish_node();
    }
    state.finish_node();
}

fn parse_class_name_attr(state: &mut ReadingState, kw_text: &str) {
    state.start_node(ClassNameAttr);
    state.token(KwClassName, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(Identifier, &name);
    }
    state.finish_node();
}

fn parse_extends_attr(state: &mut ReadingState, kw_text: &str) {
    state.start_node(ExtendsAttr);
    state.token(KwExtends, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(strings::starts_string) {
        strings::parse_string(state, false);
    } else if state.peek().is_some_and(is_identifier_start) {
        types::try_parse_type(state);
    }
    state.finish_node();
}

fn parse_tool_attr(state: &mut ReadingState, kw_text: &str) {
    state.start_node(ToolAttr);
    state.token(KwTool, kw_text);
    state.finish_node();
}

fn parse_signal_decl(state: &mut ReadingState, kw_text: &str) {
    state.start_node(SignalDecl);
    state.token(KwSignal, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(Identifier, &name);
    }
    skip_inline_trivia(state, false);
    if state.peek() == Some('(') {
        lists::parse_param_list(state);
    }
    state.finish_node();
}

fn parse_enum_decl(state: &mut ReadingState, kw_text: &str) {
    state.start_node(EnumDecl);
    state.token(KwEnum, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(Identifier, &name);
    }
    skip_inline_trivia(state, false);
    if state.peek() == Some('{') {
        lists::parse_bracketed_list(state, LBrace, '}', RBrace, parse_enum_value);
    }
    state.finish_node();
}

fn parse_enum_value(state: &mut ReadingState) {
    state.start_node(EnumValue);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(Identifier, &name);
    }
    skip_inline_trivia(state, true);
    if state.peek() == Some('=') {
        let eq = state.advance().to_string();
        state.token(Assign, &eq);
        skip_inline_trivia(state, true);
        expressions::parse_expression(state, true);
    }
    state.finish_node();
}

fn parse_const_decl(state: &mut ReadingState, kw_text: &str) {
    state.start_node(ConstDecl);
    state.token(KwConst, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(Identifier, &name);
    }
    skip_inline_trivia(state, false);
    if state.peek() == Some(':') && state.peek2() == Some('=') {
        state.advance();
        state.advance();
        state.token(ColonEq, ":=");
        skip_inline_trivia(state, false);
    } else if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
        skip_inline_trivia(state, false);
        if state.peek().is_some_and(is_identifier_start) {
            types::try_parse_type(state);
        }
        skip_inline_trivia(state, false);
    }
    if state.peek() == Some('=') {
        let eq = state.advance().to_string();
        state.token(Assign, &eq);
        skip_inline_trivia(state, false);
        expressions::parse_expression(state, false);
    }
    state.finish_node();
}

/// Shared by `VarDecl` (class member, `with_accessors = true`) and
/// `VarDeclStmt` (local statement, `with_accessors = false`) — property
/// accessors are a class-member-only feature.
pub(crate) fn parse_var_decl_core(
    state: &mut ReadingState,
    kw_text: &str,
    modifier: Option<&str>,
    with_accessors: bool,
) {
    if let Some(m) = modifier {
        state.token(KwStatic, m);
        skip_inline_trivia(state, false);
    }
    state.token(KwVar, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(Identifier, &name);
    }
    skip_inline_trivia(state, false);

    if state.peek() == Some(':') && state.peek2() == Some('=') {
        state.advance();
        state.advance();
        state.token(ColonEq, ":=");
        skip_inline_trivia(state, false);
        expressions::parse_expression(state, false);
    } else {
        if state.peek() == Some(':') {
            let colon = state.advance().to_string();
            state.token(Colon, &colon);
            skip_inline_trivia(state, false);
            if state.peek().is_some_and(is_identifier_start) {
                types::try_parse_type(state);
            }
            skip_inline_trivia(state, false);
        }
        if state.peek() == Some('=') {
            let eq = state.advance().to_string();
            state.token(Assign, &eq);
            skip_inline_trivia(state, false);
            expressions::parse_expression(state, false);
        }
    }

    if with_accessors {
        skip_inline_trivia(state, false);
        accessors::try_parse_accessors(state);
    }
}

pub(crate) fn parse_func_decl_core(state: &mut ReadingState, kw_text: &str, modifier: Option<&str>) {
    if let Some(m) = modifier {
        state.token(KwStatic, m);
        skip_inline_trivia(state, false);
    }
    state.token(KwFunc, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(Identifier, &name);
    }
    skip_inline_trivia(state, false);
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
        skip_inline_trivia(state, false);
    }
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
    }
    let threshold = state.last_line_indent() + 1;
    statements::parse_statement_list(state, threshold, false);
}

fn parse_inner_class_decl(state: &mut ReadingState, kw_text: &str) {
    state.start_node(InnerClassDecl);
    state.token(KwClass, kw_text);
    skip_inline_trivia(state, false);
    if state.peek().is_some_and(is_identifier_start) {
        let name = read_identifier_run(state);
        state.token(Identifier, &name);
    }
    skip_inline_trivia(state, false);
    if state.peek() == Some(':') {
        let colon = state.advance().to_string();
        state.token(Colon, &colon);
    }
    let threshold = state.last_line_indent() + 1;
    parse_class_body(state, threshold, false);
    state.finish_node();
}
