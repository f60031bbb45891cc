//! undebugify: strips bare debug-call statements from JavaScript source.
//!
//! Given a source file and a configured list of function names, every
//! top-level statement whose sole content is a call to one of those names is
//! erased from the output; all other text passes through byte-for-byte,
//! comments and formatting included.
//!
//! ```no_run
//! use undebugify::{strip_source, RemovalConfig};
//!
//! let config = RemovalConfig::from_names(["log"]);
//! let outcome = strip_source("app.js", "log(\"boot\");\nstart();\n", &config)?;
//! assert_eq!(outcome.output, "\nstart();\n");
//! # Ok::<(), undebugify::UndebugifyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod pipeline;
pub mod rewrite;
pub mod syntax;

pub use config::{ConfigLoader, ConfigProvenance, RemovalConfig, ResolvedConfig};
pub use engine::{strip_source, StripOutcome};
pub use errors::UndebugifyError;
pub use rewrite::RewriteSet;
pub use syntax::{NodeKind, SourceTree};
