//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::EggdepsError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, EggdepsError> {
        match command {
            Commands::Render {
                input,
                output,
                roots,
            } => RenderOptions::builder()
                .with_input(input.input)
                .with_input_format(input.input_format)
                .with_output(output.output)
                .with_extra_roots(roots)
                .with_quiet(output.quiet)
                .build(),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command, writing the DOT document for a graph file
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
