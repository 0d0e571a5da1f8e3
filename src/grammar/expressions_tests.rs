//! Tests for the expression resolver (spec.md §4.4): literal forms,
//! postfix chains (call/index/member), prefix/ternary operators, lambdas,
//! and `preload`/`await`/`yield`.

use crate::cst::SyntaxKind;
use crate::test_util::{child_kinds, find, find_all, parse_expr, token_texts};

#[test]
fn bool_null_self_super_literals() {
    assert_eq!(parse_expr("true").kind(), SyntaxKind::BoolExpr);
    assert_eq!(parse_expr("false").kind(), SyntaxKind::BoolExpr);
    assert_eq!(parse_expr("null").kind(), SyntaxKind::NullExpr);
    assert_eq!(parse_expr("self").kind(), SyntaxKind::SelfExpr);
    assert_eq!(parse_expr("super").kind(), SyntaxKind::SuperExpr);
}

#[test]
fn super_call_parses_its_argument_list() {
    let tree = parse_expr("super(1, 2)");
    assert_eq!(tree.kind(), SyntaxKind::SuperExpr);
    assert!(find(&tree, SyntaxKind::ArgList).is_some());
    assert_eq!(tree.text(), "super(1, 2)");
}

#[test]
fn array_and_dictionary_initializers() {
    let arr = parse_expr("[1, 2, 3]");
    assert_eq!(arr.kind(), SyntaxKind::ArrayExpr);
    assert_eq!(find_all(&arr, SyntaxKind::NumberExpr).len(), 3);
    assert_eq!(arr.text(), "[1, 2, 3]");

    let dict = parse_expr(r#"{"a": 1, "b": 2}"#);
    assert_eq!(dict.kind(), SyntaxKind::DictExpr);
    assert_eq!(find_all(&dict, SyntaxKind::DictEntry).len(), 2);
    assert_eq!(dict.text(), r#"{"a": 1, "b": 2}"#);
}

#[test]
fn bracket_expression_round_trips_with_inner_newline() {
    let input = "(1 +\n2)";
    let tree = parse_expr(input);
    assert_eq!(tree.kind(), SyntaxKind::BracketExpr);
    assert_eq!(tree.text(), input);
}

#[test]
fn call_index_and_member_chain_all_wrap_the_same_checkpoint() {
    let input = "foo.bar[0](1, 2).baz";
    let tree = parse_expr(input);
    // The outermost node is the last-applied postfix: the final `.baz`.
    assert_eq!(tree.kind(), SyntaxKind::MemberExpr);
    assert_eq!(tree.text(), input);

    let call = find(&tree, SyntaxKind::CallExpr).expect("call survives inside the chain");
    assert!(find(&call, SyntaxKind::IndexExpr).is_some());
    let innermost_member = find_all(&tree, SyntaxKind::MemberExpr);
    // Two `.` accesses total: `foo.bar` and the trailing `.baz`.
    assert_eq!(innermost_member.len(), 2);
}

#[test]
fn leading_dot_float_literal() {
    let tree = parse_expr(".5");
    assert_eq!(tree.kind(), SyntaxKind::NumberExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::Number), vec![".5"]);
    assert_eq!(tree.text(), ".5");
}

#[test]
fn dot_member_access_on_a_call_still_parses_as_member_expr() {
    // `.` is only ever the start of a number when the next character is a
    // digit; `foo.bar` still routes through the member-access path.
    let tree = parse_expr("foo.bar");
    assert_eq!(tree.kind(), SyntaxKind::MemberExpr);
    assert_eq!(tree.text(), "foo.bar");
}

#[test]
fn unary_minus_binds_tighter_than_power_is_respected() {
    // `-2 ** 2` parses as `-(2 ** 2)`, matching ordinary GDScript precedence.
    let tree = parse_expr("-2 ** 2");
    assert_eq!(tree.kind(), SyntaxKind::UnaryExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::Minus), vec!["-"]);
    let inner = find(&tree, SyntaxKind::BinaryExpr).unwrap();
    assert_eq!(token_texts(&inner, SyntaxKind::Pow), vec!["**"]);
    assert_eq!(tree.text(), "-2 ** 2");
}

#[test]
fn not_keyword_prefix_and_and_or_infix() {
    let tree = parse_expr("not a and b or c");
    assert_eq!(tree.kind(), SyntaxKind::BinaryExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::KwOr), vec!["or"]);
    let and_expr = find(&tree, SyntaxKind::BinaryExpr).unwrap();
    assert_eq!(token_texts(&and_expr, SyntaxKind::KwAnd), vec!["and"]);
    let not_expr = find(&tree, SyntaxKind::UnaryExpr).unwrap();
    assert_eq!(token_texts(&not_expr, SyntaxKind::KwNot), vec!["not"]);
    assert_eq!(tree.text(), "not a and b or c");
}

#[test]
fn ternary_if_else_expression() {
    let input = "a if cond else b";
    let tree = parse_expr(input);
    assert_eq!(tree.kind(), SyntaxKind::IfExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::KwIf), vec!["if"]);
    assert_eq!(token_texts(&tree, SyntaxKind::KwElse), vec!["else"]);
    assert_eq!(
        child_kinds(&tree),
        vec![
            SyntaxKind::IdentifierExpr,
            SyntaxKind::IdentifierExpr,
            SyntaxKind::IdentifierExpr
        ]
    );
    assert_eq!(tree.text(), input);
}

#[test]
fn get_node_and_node_path_expressions() {
    let get_node = parse_expr("$Player/../Camera2D");
    assert_eq!(get_node.kind(), SyntaxKind::GetNodeExpr);
    assert_eq!(get_node.text(), "$Player/../Camera2D");

    let node_path = parse_expr("@\"Node/Path\"");
    assert_eq!(node_path.kind(), SyntaxKind::NodePathExpr);
    assert!(find(&node_path, SyntaxKind::StringExpr).is_some());
    assert_eq!(node_path.text(), "@\"Node/Path\"");
}

#[test]
fn preload_await_and_yield_expressions() {
    let preload = parse_expr(r#"preload("res://x.gd")"#);
    assert_eq!(preload.kind(), SyntaxKind::PreloadExpr);
    assert!(find(&preload, SyntaxKind::ArgList).is_some());

    let await_expr = parse_expr("await do_thing()");
    assert_eq!(await_expr.kind(), SyntaxKind::AwaitExpr);
    assert!(find(&await_expr, SyntaxKind::CallExpr).is_some());

    let yield_expr = parse_expr("yield(self, \"done\")");
    assert_eq!(yield_expr.kind(), SyntaxKind::YieldExpr);
    assert!(find(&yield_expr, SyntaxKind::ArgList).is_some());
}

#[test]
fn lambda_with_params_and_return_type_reuses_func_decl_grammar() {
    let input = "func(x: int) -> int: return x * 2";
    let tree = parse_expr(input);
    assert_eq!(tree.kind(), SyntaxKind::LambdaExpr);
    assert!(find(&tree, SyntaxKind::ParamList).is_some());
    assert_eq!(token_texts(&tree, SyntaxKind::Arrow), vec!["->"]);
    assert!(find(&tree, SyntaxKind::ReturnStmt).is_some());
    assert_eq!(tree.text(), input);
}

#[test]
fn var_decl_expression_used_in_a_match_case() {
    // `var x` as a binding pattern inside a match case (spec.md §4.4
    // "keyword expressions ... var (variable-decl-expr for match cases)").
    let tree = parse_expr("var x");
    assert_eq!(tree.kind(), SyntaxKind::VarDeclExpr);
    assert_eq!(token_texts(&tree, SyntaxKind::Identifier), vec!["x"]);
}

/// spec.md §8 boundary behavior, re-verified at the resolver level: `**=`
/// is a single token, not `**` followed by `=`.
#[test]
fn power_eq_pattern_wins_outright() {
    let tree = parse_expr("x **= 2");
    assert_eq!(token_texts(&tree, SyntaxKind::PowEq), vec!["**="]);
}

#[test]
fn stop_characters_end_the_expression_without_consuming_them() {
    // `,` is a stop char: a bare expression statement like `a, b` only
    // consumes `a`, leaving the comma for whatever higher-level resolver
    // called the expression (here, nothing — so it is left unconsumed
    // and the caller of `parse_expression` must deal with it).
    let parse = crate::parse_expression("a,").unwrap();
    let tree = parse.syntax();
    assert_eq!(tree.text(), "a,");
    assert!(crate::test_util::find(&tree, SyntaxKind::IdentifierExpr).is_some());
}
