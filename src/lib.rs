//! # eggdeps-dot - Render Package Dependency Graphs as DOT
//!
//! eggdeps-dot turns an already-computed package dependency graph into a
//! Graphviz DOT document. It does not resolve dependencies itself: whatever
//! built the graph hands it over, either in memory as a
//! [`DependencyGraph`](graph::DependencyGraph) or as a JSON/TOML document
//! read by the command line tool.
//!
//! ## Main Components
//!
//! - **Graph**: the package nodes, their dependencies and the set of roots
//! - **DotFormatter**: renders a graph as a DOT digraph
//! - **Loader**: reads graph documents from files or stdin
//!
//! ## Rendering Rules
//!
//! - Node identifiers have every `.` replaced by `_`
//! - Every node is labelled with its display name
//! - Inactive nodes are drawn `lightgrey`
//! - Roots are filled `green`; dead ends are filled
//! - Dependencies that only exist for some extras are drawn `lightgrey`
//!
//! ## Usage
//!
//! ```
//! use eggdeps_dot::common::ConfigBuilder;
//! use eggdeps_dot::graph::{DependencyGraph, DotFormatter, Extras, PackageNode};
//!
//! # fn main() -> miette::Result<()> {
//! let mut graph = DependencyGraph::new().with_roots(["my.app"]);
//! graph.insert(
//!     PackageNode::builder()
//!         .with_id("my.app")
//!         .with_dependency("zope.interface", Extras::new())
//!         .with_dependency("nose", ["test"].into_iter().collect())
//!         .build()?,
//! );
//!
//! for line in DotFormatter::new().lines(&graph) {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Loading a Graph Document
//!
//! ```no_run
//! use std::path::Path;
//!
//! use eggdeps_dot::cli::InputFormat;
//! use eggdeps_dot::graph::DotFormatter;
//! use eggdeps_dot::loader::GraphDocument;
//!
//! # fn main() -> miette::Result<()> {
//! let graph = GraphDocument::load(Path::new("deps.json"), InputFormat::Auto)?.into_graph();
//!
//! let mut dot_output = Vec::new();
//! DotFormatter::new().render_dot(&graph, &mut dot_output)?;
//! std::fs::write("deps.dot", dot_output).map_err(eggdeps_dot::error::EggdepsError::from)?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod loader;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
