//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::RenderOptions;
use crate::executors::CommandExecutor;
use crate::graph::{DependencyGraph, DotFormatter};
use crate::loader::GraphDocument;
use crate::utils::string::pluralize;

pub struct RenderExecutor;

impl RenderExecutor {
    /// Load the graph document named by `config` and merge in the extra roots
    pub fn load_graph(config: &RenderOptions) -> Result<DependencyGraph> {
        let document = GraphDocument::load(&config.input, config.input_format)
            .wrap_err_with(|| {
                format!(
                    "Failed to load graph document '{}'",
                    config.input.display()
                )
            })?;

        Ok(document
            .into_graph()
            .with_roots(config.extra_roots.iter().cloned()))
    }
}

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        if !config.quiet {
            eprintln!(
                "{} Rendering dependency graph from {}...",
                style("📊").cyan(),
                style(config.input.display()).bold()
            );
        }

        let graph = Self::load_graph(&config)?;

        if graph.is_empty() && !config.quiet {
            eprintln!("{} Graph has no nodes to render", style("ℹ").blue());
        }

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout().lock())
            };

        DotFormatter::new()
            .render_dot(&graph, output_writer.as_mut())
            .wrap_err("Failed to render DOT graph")?;

        if let Some(output_path) = config.output
            && !config.quiet
        {
            let nodes = graph.len();
            let edges = graph.edge_count();
            eprintln!(
                "{} Graph written to {} ({} {}, {} {})",
                style("✓").green(),
                style(output_path.display()).bold(),
                nodes,
                pluralize("node", nodes),
                edges,
                pluralize("edge", edges)
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::cli::InputFormat;
    use crate::common::ConfigBuilder;

    fn options(input: PathBuf, output: Option<PathBuf>, roots: &[&str]) -> RenderOptions {
        RenderOptions::builder()
            .with_input(input)
            .with_input_format(InputFormat::Auto)
            .with_output(output)
            .with_extra_roots(roots.iter().map(|r| r.to_string()).collect())
            .with_quiet(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_extra_roots_are_merged() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("graph.json");
        fs::write(
            &input,
            r#"{ "roots": ["a"], "nodes": { "a": {}, "b": {} } }"#,
        )
        .unwrap();

        let graph = RenderExecutor::load_graph(&options(input, None, &["b"])).unwrap();

        assert!(graph.is_root("a"));
        assert!(graph.is_root("b"));
    }

    #[test]
    fn test_execute_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("graph.json");
        let output = dir.path().join("graph.dot");
        fs::write(&input, r#"{ "nodes": { "x.y": { "dead_end": true } } }"#).unwrap();

        RenderExecutor::execute(options(input, Some(output.clone()), &[])).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            "digraph {\nx_y [label=\"x.y\", style=\"filled\"]\n}\n"
        );
    }

    #[test]
    fn test_execute_reports_missing_input() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("nope.json");
        let output = dir.path().join("graph.dot");

        let err = RenderExecutor::execute(options(input, Some(output.clone()), &[])).unwrap_err();

        assert!(err.to_string().starts_with("Failed to load graph document"));
        assert!(!output.exists());
    }
}
