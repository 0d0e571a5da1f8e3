//! Tests for the string resolver (spec.md §3.4, §4.4): escapes are kept
//! literal rather than interpreted, triple-quoted strings tolerate embedded
//! newlines and stray bounder runs, and malformed/unterminated strings
//! still round-trip while reporting a diagnostic.

use crate::cst::SyntaxKind;
use crate::diagnostics::DiagnosticKind;
use crate::test_util::{parse_expr, token_texts};

#[test]
fn single_quoted_string_round_trips() {
    let input = "'hello'";
    let tree = parse_expr(input);
    assert_eq!(tree.kind(), SyntaxKind::StringExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::Quote), vec!["'", "'"]);
    assert_eq!(token_texts(&tree, SyntaxKind::StringPart), vec!["hello"]);
    assert_eq!(tree.text(), input);
}

#[test]
fn double_quoted_string_round_trips() {
    let input = "\"hello\"";
    let tree = parse_expr(input);
    assert_eq!(tree.kind(), SyntaxKind::StringExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::StringPart), vec!["hello"]);
    assert_eq!(tree.text(), input);
}

#[test]
fn empty_string_has_no_string_part() {
    let input = "\"\"";
    let tree = parse_expr(input);
    assert_eq!(tree.kind(), SyntaxKind::StringExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::Quote), vec!["\"", "\""]);
    assert!(token_texts(&tree, SyntaxKind::StringPart).is_empty());
    assert_eq!(tree.text(), input);
}

/// Triple-bounded strings may contain a literal, unescaped newline — the
/// single-quote form cannot (it ends at the first raw `\n`).
#[test]
fn triple_quoted_string_spans_embedded_newlines() {
    let input = "\"\"\"line one\nline two\"\"\"";
    let tree = parse_expr(input);
    assert_eq!(tree.kind(), SyntaxKind::StringExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::Quote), vec!["\"\"\"", "\"\"\""]);
    assert_eq!(
        token_texts(&tree, SyntaxKind::StringPart),
        vec!["line one\nline two"]
    );
    assert_eq!(tree.text(), input);
}

#[test]
fn raw_string_disables_escape_processing() {
    let input = r#"r"a\nb""#;
    let tree = parse_expr(input);
    assert_eq!(tree.kind(), SyntaxKind::StringExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::RawPrefix), vec!["r"]);
    assert!(token_texts(&tree, SyntaxKind::Escape).is_empty());
    assert_eq!(token_texts(&tree, SyntaxKind::StringPart), vec!["a\\nb"]);
    assert_eq!(tree.text(), input);
}

#[test]
fn known_escape_sequences_are_preserved_not_interpreted() {
    let input = r#""a\tb\\c""#;
    let tree = parse_expr(input);
    assert_eq!(tree.kind(), SyntaxKind::StringExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::Escape), vec!["\\t", "\\\\"]);
    assert_eq!(token_texts(&tree, SyntaxKind::StringPart), vec!["a", "b", "c"]);
    assert_eq!(tree.text(), input);
}

/// A bounder character repeated fewer than three times inside a triple
/// string is ordinary content, not a close (spec.md §8 boundary behavior).
#[test]
fn triple_quote_tolerates_a_stray_run_of_two() {
    let input = "\"\"\"one \"\" two\"\"\"";
    let tree = parse_expr(input);
    assert_eq!(tree.kind(), SyntaxKind::StringExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::Quote), vec!["\"\"\"", "\"\"\""]);
    assert_eq!(token_texts(&tree, SyntaxKind::StringPart), vec!["one \"\" two"]);
    assert_eq!(tree.text(), input);
}

/// `\q` is not a recognized escape: the backslash is pushed back out of the
/// string (so the string ends early) and a diagnostic is reported, but no
/// byte is lost.
#[test]
fn malformed_escape_pushes_the_backslash_back_and_reports_a_diagnostic() {
    let input = "\"a\\qb\"";
    let parse = crate::parse_expression(input).expect("no recursion limit configured");
    assert!(parse
        .diagnostics()
        .iter()
        .any(|d| d.kind == DiagnosticKind::MalformedEscape));
    // The string was closed off by the malformed escape, not by running out
    // of input — no spurious `UnterminatedAtEof` alongside it.
    assert!(!parse
        .diagnostics()
        .iter()
        .any(|d| d.kind == DiagnosticKind::UnterminatedAtEof));
    assert_eq!(parse.syntax().text(), input);
}

/// A string still open at end of input is closed in place and reported,
/// never panicking or dropping bytes.
#[test]
fn unterminated_string_at_eof_reports_a_diagnostic_and_round_trips() {
    let input = "\"unterminated";
    let parse = crate::parse_expression(input).expect("no recursion limit configured");
    assert!(parse
        .diagnostics()
        .iter()
        .any(|d| d.kind == DiagnosticKind::UnterminatedAtEof));
    let tree = parse.syntax();
    assert_eq!(tree.kind(), SyntaxKind::StringExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::Quote), vec!["\""]);
    assert_eq!(token_texts(&tree, SyntaxKind::StringPart), vec!["unterminated"]);
    assert_eq!(tree.text(), input);
}

/// A single-quoted (non-triple) string ends at a raw newline rather than
/// consuming it; the newline is left for the caller.
#[test]
fn single_line_string_does_not_swallow_a_following_newline() {
    let input = "\"abc";
    let parse = crate::parse_expression(&format!("{input}\n")).expect("no recursion limit configured");
    let tree = parse.syntax();
    assert_eq!(tree.text(), format!("{input}\n"));
    assert_eq!(token_texts(&tree, SyntaxKind::Newline), vec!["\n"]);
}
