//! Per-file orchestration: parse, visit, render.
//!
//! One invocation is a strict, synchronous sequence that completes or fails
//! atomically for its file. The invocation owns its tree and its
//! [`RewriteSet`]; the configuration is an immutable input and is never
//! mutated or memoized here, so independent invocations may run in parallel
//! with no coordination.

use crate::{
    config::RemovalConfig,
    errors::UndebugifyError,
    rewrite::{self, RewriteSet},
    syntax::SourceTree,
};

/// Result of one successful invocation, reported exactly once.
#[derive(Debug)]
pub struct StripOutcome {
    /// The rewritten source; byte-identical to the input outside the
    /// removed statements.
    pub output: String,
    /// Number of statements erased.
    pub removed: usize,
}

/// Transforms one file's source: every statement that is a bare call to a
/// configured name renders as the empty string, and all other text passes
/// through byte-for-byte. `name` labels diagnostics only.
pub fn strip_source(
    name: &str,
    source: &str,
    config: &RemovalConfig,
) -> Result<StripOutcome, UndebugifyError> {
    let tree = SourceTree::parse(name, source)?;

    let mut rewrites = RewriteSet::new();
    rewrite::mark_removals(&tree, config, &mut rewrites);

    if rewrites.is_empty() {
        return Ok(StripOutcome {
            output: source.to_string(),
            removed: 0,
        });
    }

    let root = tree.root();
    let mut output = String::with_capacity(source.len());
    // The root node's span may not cover leading or trailing trivia.
    output.push_str(&source[..root.start_byte()]);
    rewrite::render(&tree, &rewrites, root, &mut output);
    output.push_str(&source[root.end_byte()..]);

    Ok(StripOutcome {
        output,
        removed: rewrites.len(),
    })
}
