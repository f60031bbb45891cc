//! Defines the command-line arguments and subcommands for the undebugify CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "undebugify",
    version,
    about = "Strips bare debug-call statements from JavaScript source."
)]
pub struct UndebugifyArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Strip configured calls from one file and print (or rewrite) it.
    Strip {
        /// The JavaScript file to transform.
        #[arg(required = true)]
        file: PathBuf,
        /// Function names to strip; overrides package.json discovery.
        #[arg(long, value_delimiter = ',', value_name = "NAMES")]
        remove: Option<Vec<String>>,
        /// Rewrite the file in place instead of printing to stdout.
        #[arg(long)]
        write: bool,
    },
    /// Strip every included file under a directory.
    Run {
        /// The directory to walk.
        #[arg(default_value = ".")]
        path: PathBuf,
        /// Function names to strip; overrides per-file discovery.
        #[arg(long, value_delimiter = ',', value_name = "NAMES")]
        remove: Option<Vec<String>>,
        /// File extensions to process (default: js,jsx,mjs,cjs).
        #[arg(long, value_delimiter = ',', value_name = "EXTS")]
        include: Option<Vec<String>>,
        /// File extensions to skip.
        #[arg(long, value_delimiter = ',', value_name = "EXTS")]
        exclude: Option<Vec<String>>,
        /// Rewrite files in place instead of reporting a dry run.
        #[arg(long)]
        write: bool,
    },
    /// Show the parse tree for a file, with byte spans.
    Ast {
        /// The JavaScript file to parse.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Show the configuration governing a path, and where it came from.
    Config {
        /// A source file or project directory.
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}
