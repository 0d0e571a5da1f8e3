//! Shared black-box test helpers. Unlike `src/test_util.rs` (crate-internal,
//! used by the `#[cfg(test)]` unit suites), this module only reaches the
//! crate through its public API, exactly as an external consumer would.

use gdscript_cst::{SyntaxKind, SyntaxNode};
use rowan::NodeOrToken;

/// A deterministic, fully self-contained tree dump: one line per node or
/// token, indented by depth, `KIND text` for tokens and bare `KIND` for
/// nodes. Not the crate's own `Debug` output (rowan's default `{:#?}`
/// carries byte offsets, which would make every fixture's expected
/// snapshot brittle to unrelated whitespace changes elsewhere in the
/// file) — this is local to the test suite, mirroring how the teacher's
/// `dump_errors()`/`dump()` helpers format output for snapshotting.
pub fn dump(node: &SyntaxNode) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:?}\n", node.kind()));
    dump_children(node, 1, &mut out);
    out
}

fn dump_children(node: &SyntaxNode, depth: usize, out: &mut String) {
    for element in node.children_with_tokens() {
        match element {
            NodeOrToken::Node(child) => {
                out.push_str(&"  ".repeat(depth));
                out.push_str(&format!("{:?}\n", child.kind()));
                dump_children(&child, depth + 1, out);
            }
            NodeOrToken::Token(token) => {
                out.push_str(&"  ".repeat(depth));
                out.push_str(&format!("{:?} {:?}\n", token.kind(), token.text()));
            }
        }
    }
}

pub fn assert_round_trips(tree: &SyntaxNode, source: &str) {
    assert_eq!(tree.text(), source, "round-trip failed for {source:?}");
}

/// Recursively checks spec.md §3.1's parent invariant from outside the
/// crate, using only public API.
pub fn assert_parent_links(node: &SyntaxNode) {
    for child in node.children() {
        assert_eq!(child.parent().as_ref(), Some(node));
        assert_parent_links(&child);
    }
    for token in node.children_with_tokens().filter_map(|el| el.into_token()) {
        assert_eq!(token.parent().as_ref(), Some(node));
    }
}

#[allow(dead_code)]
pub fn has_kind(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    node.descendants().any(|n| n.kind() == kind)
}
