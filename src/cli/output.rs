//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for colorizing per-file reports, rendering
//! errors through miette, and printing resolved configuration. Centralizing
//! output logic here keeps the command handlers free of formatting concerns.

use miette::Report;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::{
    config::ResolvedConfig,
    errors::UndebugifyError,
    pipeline::FileReport,
};

/// Renders one error to stderr as a full miette diagnostic.
pub fn print_error(error: UndebugifyError) {
    eprintln!("{:?}", Report::new(error));
}

/// Prints per-file reports for a multi-file run plus a summary line.
/// Returns the number of failed files.
pub fn print_reports(reports: Vec<FileReport>, write: bool) -> usize {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut stripped = 0usize;
    let mut failures = 0usize;

    for report in reports {
        match report {
            FileReport::Stripped {
                path,
                removed,
                changed,
            } => {
                if changed {
                    stripped += 1;
                    let _ = stdout
                        .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
                    print!("{}", if write { "stripped" } else { "would strip" });
                    let _ = stdout.reset();
                    println!(
                        " {} statement{} from {}",
                        removed,
                        if removed == 1 { "" } else { "s" },
                        path.display()
                    );
                } else {
                    println!("unchanged {}", path.display());
                }
            }
            FileReport::Unconfigured { path } => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
                print!("unconfigured");
                let _ = stdout.reset();
                println!(" {}", path.display());
            }
            FileReport::Failed { path, error } => {
                failures += 1;
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
                print!("failed");
                let _ = stdout.reset();
                println!(" {}", path.display());
                print_error(error);
            }
        }
    }

    println!(
        "{} file{} {}, {} failed",
        stripped,
        if stripped == 1 { "" } else { "s" },
        if write { "rewritten" } else { "would change" },
        failures
    );
    failures
}

/// Prints a resolved configuration with its provenance.
pub fn print_config(resolved: &ResolvedConfig) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    let _ = stdout.set_color(ColorSpec::new().set_bold(true));
    println!("remove: {}", resolved.config.remove.join(", "));
    let _ = stdout.reset();

    println!("from:   {}", resolved.provenance.file.display());
    println!(
        "cached: {}",
        if resolved.provenance.cached { "yes" } else { "no" }
    );
}
