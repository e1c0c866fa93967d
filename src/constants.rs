//! Configuration constants for eggdeps-dot
//!
//! Defaults used by the command line layer. Each of them can be overridden
//! through the matching `EGGDEPS_*` environment variable.

/// Graph document input configuration
pub mod input {
    /// Input path meaning "read standard input"
    pub const STDIN_PATH: &str = "-";

    /// Default graph document format when not specified
    pub const DEFAULT_FORMAT: &str = "auto";
}

/// DOT attribute values
pub mod dot {
    /// Color of inactive nodes and of edges qualified by extras
    pub const INACTIVE_COLOR: &str = "lightgrey";

    /// Style shared by root nodes and dead ends
    pub const FILLED_STYLE: &str = "filled";

    /// Fill color of root nodes
    pub const ROOT_FILL_COLOR: &str = "green";
}
