//! Shared test-only helpers: small utilities that make assertions over
//! parsed trees readable across the grammar's test suites (mirrors the
//! teacher's `query/dump.rs` test-helper module, adapted to plain
//! assertions over `rowan` nodes rather than a `Query`-specific printer).

use crate::cst::{SyntaxKind, SyntaxNode};

pub fn parse_class(text: &str) -> SyntaxNode {
    crate::parse_file_content(text)
        .expect("no recursion limit configured")
        .syntax()
}

pub fn parse_expr(text: &str) -> SyntaxNode {
    crate::parse_expression(text)
        .expect("no recursion limit configured")
        .syntax()
}

pub fn parse_stmts(text: &str, threshold: u32) -> SyntaxNode {
    crate::parse_statements(text, threshold)
        .expect("no recursion limit configured")
        .syntax()
}

/// The first descendant node (pre-order, root included) of `kind`.
pub fn find(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.descendants().find(|n| n.kind() == kind)
}

/// Every descendant node (pre-order, root included) of `kind`.
pub fn find_all(node: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxNode> {
    node.descendants().filter(|n| n.kind() == kind).collect()
}

/// The texts of every token of `kind` reachable from `node`, in pre-order.
pub fn token_texts(node: &SyntaxNode, kind: SyntaxKind) -> Vec<String> {
    node.descendants_with_tokens()
        .filter_map(|el| el.into_token())
        .filter(|t| t.kind() == kind)
        .map(|t| t.text().to_string())
        .collect()
}

/// The `SyntaxKind` of each direct child *node* of `node` (tokens
/// skipped) — useful for checking the shape a resolver builds without
/// committing a test to every trivia token in between.
pub fn child_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.children().map(|n| n.kind()).collect()
}

/// Asserts the invariant every node in the tree rooted at `node` must
/// satisfy: every token's (and every child node's) `.parent()` is the
/// node that directly owns it (spec.md §3.1 "Invariant (parent)").
pub fn assert_parent_links(node: &SyntaxNode) {
    for child in node.children() {
        assert_eq!(child.parent().as_ref(), Some(node));
        assert_parent_links(&child);
    }
    for token in node.children_with_tokens().filter_map(|el| el.into_token()) {
        assert_eq!(token.parent().as_ref(), Some(node));
    }
}
