//! Conversion from petgraph graphs built upstream
//!
//! Graph builders working on a `DiGraph` keep dependency edges as graph
//! edges rather than as per-node lists. This adapter flattens them into a
//! [`DependencyGraph`] the formatter can consume.

use petgraph::graph::DiGraph;

use crate::error::EggdepsError;
use crate::graph::{DependencyGraph, Extras, PackageNode};

/// Per-node payload of an upstream petgraph graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub is_dead_end: bool,
}

impl NodeInfo {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            is_active: true,
            is_dead_end: false,
        }
    }
}

impl DependencyGraph {
    /// Build a graph from a petgraph `DiGraph`.
    ///
    /// Each node's dependencies follow edge insertion order. Roots are taken
    /// as given and need not name a node of `graph`. Two nodes sharing an
    /// identifier are rejected as [`EggdepsError::InvalidInput`].
    pub fn from_digraph<I, S>(
        graph: &DiGraph<NodeInfo, Extras>,
        roots: I,
    ) -> Result<Self, EggdepsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dependencies: Vec<Vec<(String, Extras)>> = vec![Vec::new(); graph.node_count()];

        for edge in graph.edge_indices() {
            let (source, target) =
                graph
                    .edge_endpoints(edge)
                    .ok_or_else(|| EggdepsError::InvalidInput {
                        message: "Edge must have endpoints".to_string(),
                    })?;
            let extras = graph
                .edge_weight(edge)
                .ok_or_else(|| EggdepsError::InvalidInput {
                    message: "Edge weight not found for existing edge".to_string(),
                })?;
            dependencies[source.index()].push((graph[target].id.clone(), extras.clone()));
        }

        let mut result = DependencyGraph::new().with_roots(roots);
        for (index, deps) in graph.node_indices().zip(dependencies) {
            let info = &graph[index];
            let replaced = result.insert(PackageNode {
                id: info.id.clone(),
                name: info.name.clone(),
                is_active: info.is_active,
                is_dead_end: info.is_dead_end,
                dependencies: deps,
            });
            if replaced.is_some() {
                return Err(EggdepsError::InvalidInput {
                    message: format!("Duplicate node identifier '{}'", info.id),
                });
            }
        }

        Ok(result)
    }
}
