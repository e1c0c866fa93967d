//! # Configuration Module
//!
//! Configuration structures for the eggdeps-dot commands, each with a builder
//! implementing [`ConfigBuilder`](crate::common::ConfigBuilder).
//!
//! ## Example
//!
//! ```
//! use eggdeps_dot::cli::InputFormat;
//! use eggdeps_dot::common::ConfigBuilder;
//! use eggdeps_dot::config::RenderOptions;
//!
//! let options = RenderOptions::builder()
//!     .with_input("deps.json".into())
//!     .with_input_format(InputFormat::Auto)
//!     .with_output(Some("deps.dot".into()))
//!     .build()
//!     .unwrap();
//! assert!(options.extra_roots.is_empty());
//! ```

pub mod render;

pub use render::RenderOptions;
