//! Graph document loading
//!
//! An upstream tool that has already resolved the dependency graph hands it
//! over as a JSON or TOML document:
//!
//! ```json
//! {
//!   "roots": ["a.b"],
//!   "nodes": {
//!     "a.b": { "dependencies": [{ "id": "c.d" }] },
//!     "c.d": { "active": false, "dead_end": true }
//!   }
//! }
//! ```
//!
//! A dependency is either a bare identifier or an `{ id, extras }` table.
//! `extras` is a list of extra names; a non-empty list marks the dependency
//! as conditional. Other markers such as `true` are rejected, and so are
//! unknown keys at any level.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::cli::InputFormat;
use crate::error::{EggdepsError, TomlParseError};
use crate::graph::{DependencyGraph, Extras, PackageNode};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    pub roots: Vec<String>,
    #[serde(default)]
    pub nodes: BTreeMap<String, NodeEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeEntry {
    pub name: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub dead_end: bool,
    #[serde(default)]
    pub dependencies: Vec<DependencyEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DependencyEntry {
    Simple(String),
    Detailed(DetailedDependency),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailedDependency {
    pub id: String,
    #[serde(default)]
    pub extras: Extras,
}

fn default_active() -> bool {
    true
}

impl GraphDocument {
    /// Read a document from `path`, or from stdin when `path` is `-`
    pub fn load(path: &Path, format: InputFormat) -> Result<Self, EggdepsError> {
        let format = format.resolve(path);
        if crate::cli::is_stdin(path) {
            return Self::read_from(std::io::stdin().lock(), path, format);
        }

        let content = std::fs::read_to_string(path).map_err(|e| EggdepsError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string(), format)
    }

    /// Read a whole document from `reader`; `origin` names it in errors
    pub fn read_from(
        mut reader: impl Read,
        origin: &Path,
        format: InputFormat,
    ) -> Result<Self, EggdepsError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| EggdepsError::FileReadError {
                path: origin.to_path_buf(),
                source: e,
            })?;

        Self::parse(&content, &origin.display().to_string(), format)
    }

    /// Parse `content`; `origin` names the document in diagnostics
    pub fn parse(content: &str, origin: &str, format: InputFormat) -> Result<Self, EggdepsError> {
        match format {
            InputFormat::Toml => toml::from_str(content).map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

                EggdepsError::TomlParseError(Box::new(TomlParseError {
                    file: origin.to_string(),
                    source_code: NamedSource::new(origin, content.to_string()),
                    span,
                    source: e,
                }))
            }),
            InputFormat::Json | InputFormat::Auto => {
                serde_json::from_str(content).map_err(EggdepsError::from)
            }
        }
    }

    pub fn into_graph(self) -> DependencyGraph {
        let mut graph = DependencyGraph::new().with_roots(self.roots);
        for (id, entry) in self.nodes {
            let dependencies = entry
                .dependencies
                .into_iter()
                .map(|dep| match dep {
                    DependencyEntry::Simple(dep) => (dep, Extras::new()),
                    DependencyEntry::Detailed(dep) => (dep.id, dep.extras),
                })
                .collect();
            graph.insert(PackageNode {
                name: entry.name.unwrap_or_else(|| id.clone()),
                id,
                is_active: entry.active,
                is_dead_end: entry.dead_end,
                dependencies,
            });
        }
        graph
    }
}
