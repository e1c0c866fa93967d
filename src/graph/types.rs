//! Core graph types
//!
//! This module contains the data structures handed to the formatter by
//! whatever built the dependency graph.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::EggdepsError;

/// Extras qualifying a dependency edge.
///
/// A dependency pulled in only for some extras is conditional; an empty set
/// means the dependency is unconditional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extras(BTreeSet<String>);

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the edge only exists for some extras
    pub fn is_conditional(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn insert(&mut self, extra: impl Into<String>) -> bool {
        self.0.insert(extra.into())
    }
}

impl<S: Into<String>> FromIterator<S> for Extras {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Represents a package in the dependency graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub is_dead_end: bool,
    pub dependencies: Vec<(String, Extras)>,
}

impl PackageNode {
    pub fn builder() -> PackageNodeBuilder {
        PackageNodeBuilder::new()
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dependencies in the order the graph builder recorded them
    pub fn dependencies(&self) -> impl Iterator<Item = (&str, &Extras)> {
        self.dependencies
            .iter()
            .map(|(dep, extras)| (dep.as_str(), extras))
    }
}

pub struct PackageNodeBuilder {
    id: Option<String>,
    name: Option<String>,
    is_active: bool,
    is_dead_end: bool,
    dependencies: Vec<(String, Extras)>,
}

impl Default for PackageNodeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageNodeBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            is_active: true,
            is_dead_end: false,
            dependencies: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_dead_end(mut self, is_dead_end: bool) -> Self {
        self.is_dead_end = is_dead_end;
        self
    }

    pub fn with_dependency(mut self, dep: &str, extras: Extras) -> Self {
        self.dependencies.push((dep.to_string(), extras));
        self
    }
}

impl crate::common::ConfigBuilder for PackageNodeBuilder {
    type Config = PackageNode;

    fn build(self) -> Result<Self::Config, EggdepsError> {
        let id = self
            .id
            .ok_or_else(|| EggdepsError::ConfigurationError {
                message: "Missing required field: id".to_string(),
            })?;
        // Distributions are usually displayed under their own identifier
        let name = self.name.unwrap_or_else(|| id.clone());

        Ok(PackageNode {
            id,
            name,
            is_active: self.is_active,
            is_dead_end: self.is_dead_end,
            dependencies: self.dependencies,
        })
    }
}

/// A fully built dependency graph: every known node keyed by identifier,
/// plus the identifiers of the entry points.
///
/// Nodes iterate in identifier order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    nodes: BTreeMap<String, PackageNode>,
    roots: BTreeSet<String>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under its own identifier, returning any node it replaces
    pub fn insert(&mut self, node: PackageNode) -> Option<PackageNode> {
        self.nodes.insert(node.id.clone(), node)
    }

    pub fn add_root(&mut self, id: impl Into<String>) -> bool {
        self.roots.insert(id.into())
    }

    pub fn with_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    pub fn get(&self, id: &str) -> Option<&PackageNode> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PackageNode> {
        self.nodes.values()
    }

    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(String::as_str)
    }

    pub fn is_root(&self, id: &str) -> bool {
        self.roots.contains(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.dependencies.len()).sum()
    }
}

impl FromIterator<PackageNode> for DependencyGraph {
    fn from_iter<I: IntoIterator<Item = PackageNode>>(iter: I) -> Self {
        let mut graph = DependencyGraph::new();
        for node in iter {
            graph.insert(node);
        }
        graph
    }
}
