//! # Dependency Graph Model and DOT Rendering
//!
//! This module holds the graph handed over by an upstream graph builder and
//! the formatter turning it into Graphviz DOT.
//!
//! ## Components
//!
//! - **PackageNode**: a package with its display name, activity and dead-end
//!   flags, and its ordered dependencies
//! - **Extras**: the extras qualifying a dependency; a non-empty set marks the
//!   edge as conditional
//! - **DependencyGraph**: nodes keyed by identifier plus the set of roots
//! - **DotFormatter**: renders a `DependencyGraph` as a DOT digraph
//!
//! ## Example
//!
//! ```
//! use eggdeps_dot::common::ConfigBuilder;
//! use eggdeps_dot::graph::{DependencyGraph, DotFormatter, Extras, PackageNode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut graph = DependencyGraph::new().with_roots(["a.b"]);
//! graph.insert(
//!     PackageNode::builder()
//!         .with_id("a.b")
//!         .with_dependency("c.d", Extras::new())
//!         .build()?,
//! );
//! graph.insert(
//!     PackageNode::builder()
//!         .with_id("c.d")
//!         .with_active(false)
//!         .with_dead_end(true)
//!         .build()?,
//! );
//!
//! let mut output = Vec::new();
//! DotFormatter::new().render_dot(&graph, &mut output)?;
//!
//! assert_eq!(
//!     String::from_utf8(output)?,
//!     "digraph {\n\
//!      a_b [label=\"a.b\", style=\"filled\", fillcolor=\"green\"]\n\
//!      a_b -> c_d\n\
//!      c_d [label=\"c.d\", color=\"lightgrey\", style=\"filled\"]\n\
//!      }\n"
//! );
//! # Ok(())
//! # }
//! ```

mod convert;
mod renderer;
mod types;

pub use convert::NodeInfo;
pub use renderer::{Attributes, DotFormatter};
pub use types::{DependencyGraph, Extras, PackageNode, PackageNodeBuilder};
