//! Unified `miette`-based diagnostics for the undebugify pipeline.
//!
//! Two error kinds belong to the core engine: an invalid removal
//! configuration and a syntax error reported by the parser collaborator.
//! Everything else here belongs to the outer pipeline (manifest discovery,
//! file I/O, directory walking) and never originates from matching or
//! rendering, which perform no fallible work of their own.

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum UndebugifyError {
    /// The `remove` list is missing or not a sequence of names. Fatal for
    /// the invocation; raised before any node is visited.
    #[error("invalid configuration: `remove` must be a sequence of function names, got {found}")]
    #[diagnostic(
        code(undebugify::config),
        help("declare the configuration as {{ \"remove\": [\"log\", \"assert\"] }}")
    )]
    InvalidConfig { found: String },

    /// No `package.json` with an `undebugify` section governs this file.
    #[error("no undebugify configuration found for {}", path.display())]
    #[diagnostic(
        code(undebugify::config),
        help("pass --remove <names>, or add an \"undebugify\" section with a \"remove\" list to package.json")
    )]
    MissingConfig { path: PathBuf },

    /// The parser collaborator rejected the source. Propagated unchanged;
    /// no partial rewrite is attempted.
    #[error("syntax error in {name}")]
    #[diagnostic(code(undebugify::parse))]
    Parse {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("could not parse this")]
        span: SourceSpan,
    },

    /// The JavaScript grammar could not be loaded into the parser. Only
    /// possible with mismatched tree-sitter builds.
    #[error("failed to load the JavaScript grammar")]
    #[diagnostic(code(undebugify::parse))]
    Grammar {
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("malformed manifest {}: {reason}", file.display())]
    #[diagnostic(code(undebugify::config))]
    MalformedManifest { file: PathBuf, reason: String },

    #[error("could not access {}", path.display())]
    #[diagnostic(code(undebugify::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk failed")]
    #[diagnostic(code(undebugify::io))]
    Walk {
        #[source]
        source: walkdir::Error,
    },
}

impl UndebugifyError {
    /// Builds the configuration-validity error, naming the offending value.
    pub(crate) fn invalid_config(value: &Value) -> Self {
        Self::InvalidConfig {
            found: summarize(value),
        }
    }
}

/// Compact JSON rendering of the offending value, truncated so a pathological
/// manifest cannot flood the diagnostic.
fn summarize(value: &Value) -> String {
    const LIMIT: usize = 80;
    let mut text = value.to_string();
    if text.len() > LIMIT {
        let mut cut = LIMIT - 3;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
        text.push_str("...");
    }
    text
}
