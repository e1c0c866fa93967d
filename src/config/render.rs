//! Render command configuration

use std::path::PathBuf;

use crate::cli::InputFormat;
use crate::error::EggdepsError;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub input: PathBuf,
    pub input_format: InputFormat,
    pub output: Option<PathBuf>,
    pub extra_roots: Vec<String>,
    pub quiet: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    input: Option<PathBuf>,
    input_format: Option<InputFormat>,
    output: Option<Option<PathBuf>>,
    extra_roots: Vec<String>,
    quiet: bool,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            input_format: None,
            output: None,
            extra_roots: Vec::new(),
            quiet: false,
        }
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_input_format(mut self, input_format: InputFormat) -> Self {
        self.input_format = Some(input_format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_extra_roots(mut self, extra_roots: Vec<String>) -> Self {
        self.extra_roots = extra_roots;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, EggdepsError> {
        Ok(RenderOptions {
            input: self.input.ok_or_else(|| EggdepsError::ConfigurationError {
                message: "Missing required field: input".to_string(),
            })?,
            input_format: self
                .input_format
                .ok_or_else(|| EggdepsError::ConfigurationError {
                    message: "Missing required field: input_format".to_string(),
                })?,
            output: self.output.ok_or_else(|| EggdepsError::ConfigurationError {
                message: "Missing required field: output".to_string(),
            })?,
            extra_roots: self.extra_roots,
            quiet: self.quiet,
        })
    }
}
