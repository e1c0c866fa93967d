//! Command implementations for the eggdeps-dot CLI
//!
//! - render: write a dependency graph document as a DOT digraph

pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
