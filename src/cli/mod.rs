//! The undebugify command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::{fs, path::Path, process};

use clap::Parser;

use crate::{
    cli::args::{Command, UndebugifyArgs},
    config::{ConfigLoader, RemovalConfig},
    engine,
    errors::UndebugifyError,
    pipeline::{FileFilter, Pipeline, PipelineOptions},
    syntax::SourceTree,
};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = UndebugifyArgs::parse();

    let result = match args.command {
        Command::Strip {
            file,
            remove,
            write,
        } => handle_strip(&file, remove, write),
        Command::Run {
            path,
            remove,
            include,
            exclude,
            write,
        } => handle_run(&path, remove, include, exclude, write),
        Command::Ast { file } => handle_ast(&file),
        Command::Config { path } => handle_config(&path),
    };

    if let Err(error) = result {
        output::print_error(error);
        process::exit(1);
    }
}

/// Handles the `strip` subcommand: one file, explicit or discovered config.
fn handle_strip(
    file: &Path,
    remove: Option<Vec<String>>,
    write: bool,
) -> Result<(), UndebugifyError> {
    let config = match remove {
        Some(names) => RemovalConfig::from_names(names),
        None => {
            let mut loader = ConfigLoader::new();
            match loader.resolve(file)? {
                Some(resolved) => resolved.config,
                None => {
                    return Err(UndebugifyError::MissingConfig {
                        path: file.to_path_buf(),
                    })
                }
            }
        }
    };

    let source = read_source(file)?;
    let outcome = engine::strip_source(&file.display().to_string(), &source, &config)?;

    if write {
        fs::write(file, &outcome.output).map_err(|source| UndebugifyError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        eprintln!(
            "stripped {} statement{} from {}",
            outcome.removed,
            if outcome.removed == 1 { "" } else { "s" },
            file.display()
        );
    } else {
        print!("{}", outcome.output);
    }
    Ok(())
}

/// Handles the `run` subcommand: walk a directory and transform each
/// admitted file, then report. Per-file failures do not abort the walk but
/// do fail the run.
fn handle_run(
    path: &Path,
    remove: Option<Vec<String>>,
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
    write: bool,
) -> Result<(), UndebugifyError> {
    let mut filter = FileFilter::default();
    if let Some(include) = include {
        filter.include = include;
    }
    if let Some(exclude) = exclude {
        filter.exclude = exclude;
    }

    let options = PipelineOptions {
        filter,
        write,
        config: remove.map(RemovalConfig::from_names),
    };

    let reports = Pipeline::new(options).run(path)?;
    let failures = output::print_reports(reports, write);
    if failures > 0 {
        process::exit(1);
    }
    Ok(())
}

/// Handles the `ast` subcommand.
fn handle_ast(file: &Path) -> Result<(), UndebugifyError> {
    let source = read_source(file)?;
    let tree = SourceTree::parse(file.display().to_string(), source)?;
    print!("{}", tree.pretty());
    Ok(())
}

/// Handles the `config` subcommand.
fn handle_config(path: &Path) -> Result<(), UndebugifyError> {
    let mut loader = ConfigLoader::new();
    let resolved = if path.is_dir() {
        loader.resolve_from(path)?
    } else {
        loader.resolve(path)?
    };
    match resolved {
        Some(resolved) => {
            output::print_config(&resolved);
            Ok(())
        }
        None => Err(UndebugifyError::MissingConfig {
            path: path.to_path_buf(),
        }),
    }
}

fn read_source(path: &Path) -> Result<String, UndebugifyError> {
    fs::read_to_string(path).map_err(|source| UndebugifyError::Io {
        path: path.to_path_buf(),
        source,
    })
}
