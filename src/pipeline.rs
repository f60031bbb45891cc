//! The host build pipeline: discovers source files, filters them by
//! extension, resolves per-file configuration, and invokes the engine on
//! each admitted file.
//!
//! Inclusion and exclusion decisions live entirely here; the engine is never
//! asked whether a file should be processed. Per-file failures are reported
//! and the run continues, leaving retry/skip/abort policy to the caller.

use std::{
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::{
    config::{ConfigLoader, RemovalConfig},
    engine,
    errors::UndebugifyError,
};

/// Extensions processed when no include list is given.
pub const DEFAULT_INCLUDE: &[&str] = &["js", "jsx", "mjs", "cjs"];

/// Extension-based include/exclude filtering.
#[derive(Debug, Clone)]
pub struct FileFilter {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Default for FileFilter {
    fn default() -> Self {
        Self {
            include: DEFAULT_INCLUDE.iter().map(|e| e.to_string()).collect(),
            exclude: Vec::new(),
        }
    }
}

impl FileFilter {
    pub fn admits(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.include.iter().any(|inc| inc == ext) && !self.exclude.iter().any(|exc| exc == ext)
    }
}

/// Outcome of one file within a multi-file run.
#[derive(Debug)]
pub enum FileReport {
    /// Transformed; `changed` is false when no statement matched.
    Stripped {
        path: PathBuf,
        removed: usize,
        changed: bool,
    },
    /// No governing configuration; passed through untouched.
    Unconfigured { path: PathBuf },
    /// This file failed; the run continued with the remaining files.
    Failed {
        path: PathBuf,
        error: UndebugifyError,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub filter: FileFilter,
    /// Rewrite files in place; otherwise the run is a dry-run report.
    pub write: bool,
    /// Fixed removal list; when absent, configuration is discovered per
    /// file from the nearest `package.json`.
    pub config: Option<RemovalConfig>,
}

/// Drives the transform over a directory tree. Owns the configuration
/// cache for the run; independent pipelines share nothing.
pub struct Pipeline {
    options: PipelineOptions,
    loader: ConfigLoader,
}

impl Pipeline {
    pub fn new(options: PipelineOptions) -> Self {
        Self {
            options,
            loader: ConfigLoader::new(),
        }
    }

    /// Walks `root` and transforms every admitted file, in sorted order so
    /// runs are deterministic.
    pub fn run(&mut self, root: &Path) -> Result<Vec<FileReport>, UndebugifyError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|source| UndebugifyError::Walk { source })?;
            if entry.file_type().is_file() && self.options.filter.admits(entry.path()) {
                files.push(entry.into_path());
            }
        }
        files.sort();

        let mut reports = Vec::with_capacity(files.len());
        for path in files {
            let report = match self.strip_file(&path) {
                Ok(report) => report,
                Err(error) => FileReport::Failed { path, error },
            };
            reports.push(report);
        }
        Ok(reports)
    }

    /// Transforms one file, resolving its configuration unless the run
    /// carries a fixed list.
    pub fn strip_file(&mut self, path: &Path) -> Result<FileReport, UndebugifyError> {
        let config = match &self.options.config {
            Some(fixed) => fixed.clone(),
            None => match self.loader.resolve(path)? {
                Some(resolved) => resolved.config,
                None => {
                    return Ok(FileReport::Unconfigured {
                        path: path.to_path_buf(),
                    })
                }
            },
        };

        let source = fs::read_to_string(path).map_err(|source| UndebugifyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path.display().to_string();
        let outcome = engine::strip_source(&name, &source, &config)?;

        let changed = outcome.output != source;
        if changed && self.options.write {
            fs::write(path, &outcome.output).map_err(|source| UndebugifyError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }

        Ok(FileReport::Stripped {
            path: path.to_path_buf(),
            removed: outcome.removed,
            changed,
        })
    }
}
