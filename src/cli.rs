use std::path::Path;

use clap::{Parser, Subcommand};

use crate::common::{InputArgs, OutputArgs};

#[derive(Parser)]
#[command(
    name = "eggdeps-dot",
    about = "Render package dependency graphs as Graphviz DOT documents",
    long_about = "eggdeps-dot takes an already-computed package dependency graph and writes it \
                  out in the DOT language. Root packages are filled green, inactive packages are \
                  greyed out, dead ends are filled and conditional (extras) dependencies are \
                  drawn in light grey. Feed the result to Graphviz to lay it out.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a dependency graph document as DOT
    ///
    /// Reads a JSON or TOML graph document (a table of nodes keyed by
    /// identifier plus a list of roots) and writes the DOT digraph to stdout
    /// or to the given output file.
    #[command(
        long_about = "Render a dependency graph document as a DOT digraph. The document lists \
                      every node keyed by its dotted identifier together with its display name, \
                      activity flag, dead-end flag and dependencies. Identifiers have dots \
                      replaced by underscores in the output so Graphviz accepts them as bare IDs."
    )]
    Render {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Additional root identifiers to highlight
        #[arg(long = "root", value_name = "ID", env = "EGGDEPS_ROOTS", value_delimiter = ',')]
        roots: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// Pick the format from the file extension
    Auto,
    Json,
    Toml,
}

impl InputFormat {
    /// Resolve `Auto` against the input path; stdin and unknown extensions
    /// are read as JSON
    pub fn resolve(self, input: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => match input.extension().and_then(|ext| ext.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("toml") => InputFormat::Toml,
                _ => InputFormat::Json,
            },
            other => other,
        }
    }
}

/// Path used on the command line to mean standard input
pub fn is_stdin(path: &Path) -> bool {
    path == Path::new(crate::constants::input::STDIN_PATH)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_auto_format_follows_extension() {
        assert_eq!(
            InputFormat::Auto.resolve(Path::new("graph.toml")),
            InputFormat::Toml
        );
        assert_eq!(
            InputFormat::Auto.resolve(Path::new("graph.TOML")),
            InputFormat::Toml
        );
        assert_eq!(
            InputFormat::Auto.resolve(Path::new("graph.json")),
            InputFormat::Json
        );
        assert_eq!(InputFormat::Auto.resolve(Path::new("-")), InputFormat::Json);
    }

    #[test]
    fn test_explicit_format_wins() {
        assert_eq!(
            InputFormat::Toml.resolve(Path::new("graph.json")),
            InputFormat::Toml
        );
    }

    #[test]
    fn test_parse_render_command() {
        let cli = Cli::try_parse_from([
            "eggdeps-dot",
            "render",
            "graph.json",
            "--root",
            "a.b",
            "--root",
            "c.d",
            "-o",
            "out.dot",
        ])
        .unwrap();

        let Commands::Render {
            input,
            output,
            roots,
        } = cli.command;
        assert_eq!(input.input, PathBuf::from("graph.json"));
        assert_eq!(output.output, Some(PathBuf::from("out.dot")));
        assert_eq!(roots, vec!["a.b".to_string(), "c.d".to_string()]);
    }

    #[test]
    fn test_input_defaults_to_stdin() {
        let cli = Cli::try_parse_from(["eggdeps-dot", "render"]).unwrap();

        let Commands::Render { input, .. } = cli.command;
        assert!(is_stdin(&input.input));
        assert_eq!(input.input_format, InputFormat::Auto);
    }
}
