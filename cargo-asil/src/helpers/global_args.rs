//! Global argument propagation helper
//!
//! Merges the global CLI flags with the configuration file so every command
//! sees one consistent set of settings.

use anyhow::Result;
use atty::Stream;

use super::{
    config::CargoAsilConfig,
    output::{
        OutputFormat,
        OutputManager,
    },
};
use crate::cli::{
    Cli,
    OutputFormatArg,
};

/// Global arguments that should be propagated to all commands
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    pub verbose:       bool,
    /// Keep the verbatim input text of each tag
    pub keep_original: bool,
    /// Output manager configured with format and color settings
    pub output:        OutputManager,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(format: OutputFormatArg) -> Self {
        match format {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

impl GlobalArgs {
    /// Create global arguments with an explicit output manager
    #[must_use]
    pub fn new(output: OutputManager) -> Self {
        Self {
            verbose: false,
            keep_original: false,
            output,
        }
    }

    /// Keep verbatim inputs
    #[must_use]
    pub fn with_keep_original(mut self, keep_original: bool) -> Self {
        self.keep_original = keep_original;
        self
    }

    /// Create GlobalArgs from the CLI struct and the loaded configuration
    pub fn from_cli(cli: &Cli, config: &CargoAsilConfig) -> Result<Self> {
        let output_format = match cli.output {
            Some(format) => format.into(),
            None => config.output_format()?.unwrap_or_default(),
        };

        let use_colors = if cli.no_color {
            false
        } else {
            config.color.unwrap_or_else(|| atty::is(Stream::Stdout))
        };

        Ok(Self {
            verbose:       cli.verbose,
            keep_original: cli.keep_original || config.keep_original.unwrap_or(false),
            output:        OutputManager::new(output_format).with_color(use_colors),
        })
    }
}
