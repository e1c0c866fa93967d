use std::fmt;
use std::io::Write;
use std::iter;

use crate::constants::dot::{FILLED_STYLE, INACTIVE_COLOR, ROOT_FILL_COLOR};
use crate::error::EggdepsError;
use crate::graph::{DependencyGraph, PackageNode};
use crate::utils::string::dot_identifier;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(EggdepsError::from)
    };
}

/// Ordered DOT attribute list.
///
/// Setting a key that is already present replaces its value in place, so a
/// key never appears twice and keeps the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(&'static str, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

/// Renders as ` [key="value", ...]`, or as nothing at all when empty.
/// Values are quoted verbatim.
impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return Ok(());
        }

        f.write_str(" [")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=\"{value}\"")?;
        }
        f.write_str("]")
    }
}

/// Formats a [`DependencyGraph`] as a Graphviz DOT digraph.
///
/// The formatter holds no state; the same graph always renders to the same
/// text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Lazily produce the lines of the DOT document, without line endings.
    pub fn lines<'a>(&self, graph: &'a DependencyGraph) -> impl Iterator<Item = String> + 'a {
        iter::once("digraph {".to_string())
            .chain(graph.nodes().flat_map(move |node| {
                let source = dot_identifier(node.id());
                let declaration = format!("{source}{}", node_attributes(graph, node));
                let edges = node.dependencies().map(move |(dep, extras)| {
                    let mut attributes = Attributes::new();
                    if extras.is_conditional() {
                        attributes.set("color", INACTIVE_COLOR);
                    }
                    format!("{source} -> {}{attributes}", dot_identifier(dep))
                });
                iter::once(declaration).chain(edges)
            }))
            .chain(iter::once("}".to_string()))
    }

    /// Write the DOT document to `output`, one newline-terminated line at a
    /// time. A failing sink aborts the render and its error is returned as
    /// [`EggdepsError::Io`].
    pub fn render_dot(
        &self,
        graph: &DependencyGraph,
        output: &mut dyn Write,
    ) -> Result<(), EggdepsError> {
        for line in self.lines(graph) {
            writeln_out!(output, "{line}")?;
        }
        output.flush().map_err(EggdepsError::from)
    }

    /// Render the whole document into a string
    pub fn render_to_string(&self, graph: &DependencyGraph) -> String {
        self.lines(graph).fold(String::new(), |mut text, line| {
            text.push_str(&line);
            text.push('\n');
            text
        })
    }
}

fn node_attributes(graph: &DependencyGraph, node: &PackageNode) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.set("label", node.name());
    if !node.is_active {
        attributes.set("color", INACTIVE_COLOR);
    }
    if graph.is_root(node.id()) {
        attributes.set("style", FILLED_STYLE);
        attributes.set("fillcolor", ROOT_FILL_COLOR);
    }
    if node.is_dead_end {
        attributes.set("style", FILLED_STYLE);
    }
    attributes
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::common::ConfigBuilder;
    use crate::graph::Extras;

    fn node(id: &str, active: bool, dead_end: bool) -> PackageNode {
        PackageNode::builder()
            .with_id(id)
            .with_active(active)
            .with_dead_end(dead_end)
            .build()
            .unwrap()
    }

    fn declaration(graph: &DependencyGraph, id: &str) -> String {
        let prefix = format!("{} [", dot_identifier(id));
        DotFormatter::new()
            .lines(graph)
            .find(|line| line.starts_with(&prefix))
            .unwrap()
    }

    #[test]
    fn test_empty_attributes_render_nothing() {
        assert_eq!(Attributes::new().to_string(), "");
    }

    #[test]
    fn test_attributes_format() {
        let mut attributes = Attributes::new();
        attributes.set("label", "a.b");
        attributes.set("color", "lightgrey");

        assert_eq!(
            attributes.to_string(),
            r#" [label="a.b", color="lightgrey"]"#
        );
    }

    #[test]
    fn test_attribute_reset_keeps_position() {
        let mut attributes = Attributes::new();
        attributes.set("label", "x");
        attributes.set("style", "dashed");
        attributes.set("fillcolor", "green");
        attributes.set("style", "filled");

        let entries: Vec<_> = attributes.iter().collect();
        assert_eq!(
            entries,
            vec![("label", "x"), ("style", "filled"), ("fillcolor", "green")]
        );
    }

    #[test]
    fn test_values_are_not_escaped() {
        let mut attributes = Attributes::new();
        attributes.set("label", r#"say "hi""#);

        assert_eq!(attributes.to_string(), r#" [label="say "hi""]"#);
    }

    #[test]
    fn test_plain_active_node_has_only_label() {
        let graph: DependencyGraph = [node("pkg.sub", true, false)].into_iter().collect();

        assert_eq!(declaration(&graph, "pkg.sub"), r#"pkg_sub [label="pkg.sub"]"#);
    }

    #[test]
    fn test_inactive_node_is_grey() {
        let graph: DependencyGraph = [node("old", false, false)].into_iter().collect();

        assert_eq!(
            declaration(&graph, "old"),
            r#"old [label="old", color="lightgrey"]"#
        );
    }

    #[test]
    fn test_inactive_root_has_all_attributes_in_order() {
        let graph = [node("app", false, false)]
            .into_iter()
            .collect::<DependencyGraph>()
            .with_roots(["app"]);

        assert_eq!(
            declaration(&graph, "app"),
            r#"app [label="app", color="lightgrey", style="filled", fillcolor="green"]"#
        );
    }

    #[test]
    fn test_dead_end_root_has_single_style() {
        let graph = [node("leaf", true, true)]
            .into_iter()
            .collect::<DependencyGraph>()
            .with_roots(["leaf"]);

        let line = declaration(&graph, "leaf");
        assert_eq!(
            line,
            r#"leaf [label="leaf", style="filled", fillcolor="green"]"#
        );
        assert_eq!(line.matches("style=").count(), 1);
    }

    #[test]
    fn test_label_uses_name_not_identifier() {
        let node = PackageNode::builder()
            .with_id("zope.interface")
            .with_name("zope.interface 3.4")
            .build()
            .unwrap();
        let graph: DependencyGraph = [node].into_iter().collect();

        assert_eq!(
            declaration(&graph, "zope.interface"),
            r#"zope_interface [label="zope.interface 3.4"]"#
        );
    }

    #[test]
    fn test_conditional_edge_is_grey() {
        let node = PackageNode::builder()
            .with_id("app")
            .with_dependency("lib.core", Extras::new())
            .with_dependency("lib.test", ["test"].into_iter().collect())
            .build()
            .unwrap();
        let graph: DependencyGraph = [node].into_iter().collect();

        let lines: Vec<_> = DotFormatter::new().lines(&graph).collect();
        assert_eq!(
            lines,
            vec![
                "digraph {".to_string(),
                r#"app [label="app"]"#.to_string(),
                "app -> lib_core".to_string(),
                r#"app -> lib_test [color="lightgrey"]"#.to_string(),
                "}".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_identifier_passes_through() {
        let node = PackageNode::builder()
            .with_id("")
            .with_dependency("", Extras::new())
            .build()
            .unwrap();
        let graph: DependencyGraph = [node].into_iter().collect();

        assert_eq!(
            DotFormatter::new().render_to_string(&graph),
            "digraph {\n [label=\"\"]\n -> \n}\n"
        );
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_is_returned() {
        let graph = DependencyGraph::new();
        let err = DotFormatter::new()
            .render_dot(&graph, &mut FailingSink)
            .unwrap_err();

        match err {
            EggdepsError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("Expected Io variant, got {other:?}"),
        }
    }
}
