//! The match-and-rewrite engine.
//!
//! One pass over the tree marks every statement that is a bare call to a
//! configured name; rendering then recomposes the source, substituting each
//! marked span with its override. The tree itself is never restructured:
//! sibling and parent byte offsets stay valid because removal is expressed
//! purely as a render-time override.

use std::collections::HashMap;

use tree_sitter::Node;

use crate::{
    config::RemovalConfig,
    syntax::{NodeKind, SourceTree},
};

/// Side-table of span overrides keyed by node identity. A node carries at
/// most one override; when present it fully determines that node's rendered
/// output and suppresses rendering of its descendants.
#[derive(Debug, Default)]
pub struct RewriteSet {
    overrides: HashMap<usize, String>,
}

impl RewriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces `node`'s rendered output unconditionally.
    pub fn replace(&mut self, node: Node, text: impl Into<String>) {
        self.overrides.insert(node.id(), text.into());
    }

    pub fn get(&self, node: Node) -> Option<&str> {
        self.overrides.get(&node.id()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

/// Tests whether `node` is a statement whose sole content is a call to one
/// of the configured names:
///
/// 1. the node is an expression statement;
/// 2. its expression is a call expression (argument shape is irrelevant);
/// 3. the callee is a plain identifier whose text is an exact,
///    case-sensitive member of the removal list.
///
/// Member-access callees (`obj.fn()`), computed callees, and calls embedded
/// in larger expressions or declarations all fail the shape test. Matching
/// is on identifier text alone; no scope analysis is attempted.
pub fn is_removable_statement(node: Node, source: &str, config: &RemovalConfig) -> bool {
    if NodeKind::of(&node) != NodeKind::ExpressionStatement {
        return false;
    }
    let Some(expression) = node.named_child(0) else {
        return false;
    };
    if NodeKind::of(&expression) != NodeKind::CallExpression {
        return false;
    }
    let Some(callee) = expression.child_by_field_name("function") else {
        return false;
    };
    NodeKind::of(&callee) == NodeKind::Identifier && config.contains(&source[callee.byte_range()])
}

/// Visits every node once and gives each matching statement an empty-string
/// override. Order is irrelevant: each node is tested in isolation. A
/// marked subtree is not descended into, since its override renders in full.
pub fn mark_removals(tree: &SourceTree, config: &RemovalConfig, rewrites: &mut RewriteSet) {
    let mut stack = vec![tree.root()];
    while let Some(node) = stack.pop() {
        if is_removable_statement(node, tree.source(), config) {
            rewrites.replace(node, "");
            continue;
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            stack.push(child);
        }
    }
}

/// Renders `node` into `out`: its override verbatim if one is present,
/// otherwise its own span with every overridden descendant substituted.
/// Text between and around children is copied byte-for-byte from the
/// original source, so unmatched code keeps its exact formatting.
pub fn render(tree: &SourceTree, rewrites: &RewriteSet, node: Node, out: &mut String) {
    if let Some(replacement) = rewrites.get(node) {
        out.push_str(replacement);
        return;
    }
    let source = tree.source();
    let mut pos = node.start_byte();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        out.push_str(&source[pos..child.start_byte()]);
        render(tree, rewrites, child, out);
        pos = child.end_byte();
    }
    out.push_str(&source[pos..node.end_byte()]);
}
