//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::cli::InputFormat;

/// Where the graph document comes from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Graph document to render (`-` reads standard input)
    #[arg(
        value_name = "INPUT",
        default_value = crate::constants::input::STDIN_PATH,
        env = "EGGDEPS_INPUT"
    )]
    pub input: PathBuf,

    /// Format of the graph document
    #[arg(
        long,
        value_enum,
        default_value = crate::constants::input::DEFAULT_FORMAT,
        env = "EGGDEPS_INPUT_FORMAT"
    )]
    pub input_format: InputFormat,
}

/// Where the DOT document goes
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, env = "EGGDEPS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Suppress status messages on stderr
    #[arg(short, long, env = "EGGDEPS_QUIET")]
    pub quiet: bool,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::EggdepsError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::EggdepsError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::EggdepsError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
