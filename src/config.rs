//! Removal configuration: the validated `remove` list, plus discovery of
//! project configuration from `package.json` with provenance and caching.
//!
//! Validation happens once at this boundary. The engine only ever sees a
//! well-formed [`RemovalConfig`]; a manifest whose `remove` field is not a
//! sequence of names fails here, before any tree traversal begins.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::UndebugifyError;

/// The key under which the transform's configuration lives in `package.json`.
pub const CONFIG_KEY: &str = "undebugify";

/// The ordered list of function names whose bare call statements are erased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalConfig {
    pub remove: Vec<String>,
}

impl RemovalConfig {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            remove: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Boundary validation for the loosely-typed JSON found in a manifest.
    /// Accepts `{ "remove": ["log", ...] }`; anything whose `remove` field
    /// is absent or not an array of strings is the fatal configuration
    /// error, with the offending value named in the diagnostic.
    pub fn from_value(value: &Value) -> Result<Self, UndebugifyError> {
        let list = match value.get("remove") {
            Some(list) => list,
            None => return Err(UndebugifyError::invalid_config(value)),
        };
        let Value::Array(items) = list else {
            return Err(UndebugifyError::invalid_config(list));
        };
        let mut remove = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(name) => remove.push(name.clone()),
                other => return Err(UndebugifyError::invalid_config(other)),
            }
        }
        Ok(Self { remove })
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.remove.iter().any(|candidate| candidate == name)
    }

    pub fn is_empty(&self) -> bool {
        self.remove.is_empty()
    }
}

/// Where a resolved configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigProvenance {
    /// Directory containing the manifest the configuration was read from.
    pub dir: PathBuf,
    /// The manifest file itself.
    pub file: PathBuf,
    /// True when this resolution was served from the loader's cache.
    pub cached: bool,
}

/// A validated configuration together with its provenance.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: RemovalConfig,
    pub provenance: ConfigProvenance,
}

/// Discovers configuration for source files and caches resolutions keyed by
/// the directory the manifest was found in. The cache is instance state;
/// independent loaders share nothing.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    cache: HashMap<PathBuf, ResolvedConfig>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves configuration for one source file by searching upward from
    /// its directory. Returns `Ok(None)` when no governing configuration
    /// exists (the caller passes the file through untouched).
    pub fn resolve(&mut self, source_file: &Path) -> Result<Option<ResolvedConfig>, UndebugifyError> {
        let start = source_file.parent().unwrap_or_else(|| Path::new("."));
        self.resolve_from(start)
    }

    /// Resolves configuration starting from a directory: the nearest
    /// ancestor holding a `package.json` decides. A manifest without an
    /// `undebugify` section means "not configured" (search stops at the
    /// package boundary); a manifest whose section is malformed is the
    /// fatal configuration error.
    pub fn resolve_from(&mut self, dir: &Path) -> Result<Option<ResolvedConfig>, UndebugifyError> {
        for ancestor in dir.ancestors() {
            if let Some(hit) = self.cache.get(ancestor) {
                let mut resolved = hit.clone();
                resolved.provenance.cached = true;
                return Ok(Some(resolved));
            }

            let manifest = ancestor.join("package.json");
            if !manifest.is_file() {
                continue;
            }

            let raw = fs::read_to_string(&manifest).map_err(|source| UndebugifyError::Io {
                path: manifest.clone(),
                source,
            })?;
            let value: Value =
                serde_json::from_str(&raw).map_err(|e| UndebugifyError::MalformedManifest {
                    file: manifest.clone(),
                    reason: e.to_string(),
                })?;

            let Some(section) = value.get(CONFIG_KEY) else {
                return Ok(None);
            };

            let resolved = ResolvedConfig {
                config: RemovalConfig::from_value(section)?,
                provenance: ConfigProvenance {
                    dir: ancestor.to_path_buf(),
                    file: manifest,
                    cached: false,
                },
            };
            self.cache.insert(ancestor.to_path_buf(), resolved.clone());
            return Ok(Some(resolved));
        }
        Ok(None)
    }
}
