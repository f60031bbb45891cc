//! The parser collaborator boundary.
//!
//! Parsing is not owned by this crate: `tree-sitter` with the JavaScript
//! grammar produces the tree, and everything downstream consumes it through
//! [`SourceTree`]. Nodes report their exact byte span into the original
//! source and are never structurally mutated; removal happens at render
//! time through span overrides (see [`crate::rewrite`]).

use miette::NamedSource;
use once_cell::sync::Lazy;
use tree_sitter::{Language, Node, Parser, Tree};

use crate::errors::UndebugifyError;

static JAVASCRIPT: Lazy<Language> = Lazy::new(|| tree_sitter_javascript::LANGUAGE.into());

/// The closed set of node kinds the matching predicate consults. Every
/// grammar production outside this set collapses into `Other`; the predicate
/// never inspects raw kind strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A statement whose entire content is one expression.
    ExpressionStatement,
    /// An invocation with a callee and an argument list.
    CallExpression,
    /// A plain identifier (not a member access, not a computed expression).
    Identifier,
    Other,
}

impl NodeKind {
    pub fn of(node: &Node) -> Self {
        match node.kind() {
            "expression_statement" => Self::ExpressionStatement,
            "call_expression" => Self::CallExpression,
            "identifier" => Self::Identifier,
            _ => Self::Other,
        }
    }
}

/// One parsed source file: the original text plus the tree that spans it.
/// The tree owns all nodes; nodes borrow from the `SourceTree` and do not
/// outlive it.
#[derive(Debug)]
pub struct SourceTree {
    name: String,
    source: String,
    tree: Tree,
}

impl SourceTree {
    /// Parses `source` into a tree. A grammar-level failure or a tree
    /// containing error nodes is the collaborator's parse error; it
    /// propagates unchanged and no partial tree is exposed.
    pub fn parse(
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, UndebugifyError> {
        let name = name.into();
        let source = source.into();

        let mut parser = Parser::new();
        parser
            .set_language(&JAVASCRIPT)
            .map_err(|source| UndebugifyError::Grammar { source })?;

        let tree = match parser.parse(source.as_bytes(), None) {
            Some(tree) if !tree.root_node().has_error() => tree,
            Some(tree) => {
                let span = first_error_range(tree.root_node());
                return Err(UndebugifyError::Parse {
                    src: NamedSource::new(&name, source),
                    name,
                    span: span.into(),
                });
            }
            None => {
                return Err(UndebugifyError::Parse {
                    src: NamedSource::new(&name, source),
                    name,
                    span: (0..0).into(),
                });
            }
        };

        Ok(Self { name, source, tree })
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Exact source text spanned by `node`.
    pub fn text(&self, node: Node) -> &str {
        &self.source[node.byte_range()]
    }

    /// Indented kind/span dump of the named nodes, for the `ast` subcommand.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_node(self.root(), 0, &mut out);
        out
    }

    fn pretty_node(&self, node: Node, depth: usize, out: &mut String) {
        if !node.is_named() {
            return;
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        let range = node.byte_range();
        out.push_str(&format!("{} [{}..{}]", node.kind(), range.start, range.end));
        if node.named_child_count() == 0 {
            out.push_str(&format!(" {:?}", self.text(node)));
        }
        out.push('\n');
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.pretty_node(child, depth + 1, out);
        }
    }
}

/// Locates the first error or missing node, depth-first, for the diagnostic
/// label. Falls back to an empty span at the start of the file.
fn first_error_range(root: Node) -> std::ops::Range<usize> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return node.byte_range();
        }
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }
    0..0
}
