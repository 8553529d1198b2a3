//! Output rendering for command results
//!
//! Every command produces a [`Report`]. The [`OutputManager`] turns it into
//! colored human text or pretty-printed JSON.

use std::str::FromStr;

use anyhow::{
    Context,
    Result,
};
use colored::{
    Color,
    Colorize,
};
use serde::Serialize;

use super::config::ConfigError;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnknownOutputFormat(s.to_string())),
        }
    }
}

/// A command result that can be rendered in every output format
pub trait Report: Serialize {
    /// Whether the command's check passed; drives the exit status.
    fn success(&self) -> bool;

    /// Human-readable lines
    fn human(&self, output: &OutputManager) -> Vec<String>;
}

/// Renders reports with a fixed format and color setting
#[derive(Debug, Clone)]
pub struct OutputManager {
    format:  OutputFormat,
    colored: bool,
}

impl OutputManager {
    /// Create a manager without colors
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colored: false,
        }
    }

    /// Enable or disable colors. JSON output is never colored.
    #[must_use]
    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored && self.format == OutputFormat::Human;
        self
    }

    /// Configured output format
    #[must_use]
    pub fn format(&self) -> &OutputFormat {
        &self.format
    }

    /// Whether colors are enabled
    #[must_use]
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Apply `color` to `text` when colors are enabled
    #[must_use]
    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Render a report to a string
    pub fn render<R: Report>(&self, report: &R) -> Result<String> {
        match self.format {
            OutputFormat::Human => Ok(report.human(self).join("\n")),
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
            },
        }
    }

    /// Render a report to stdout and return its success flag
    pub fn emit<R: Report>(&self, report: &R) -> Result<bool> {
        println!("{}", self.render(report)?);
        Ok(report.success())
    }
}

/// Plain message response
#[derive(Debug, Clone, Serialize)]
pub struct SimpleResponse {
    /// Main message
    pub message: String,
    /// Additional detail lines
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl SimpleResponse {
    /// Create a response with no details
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Vec::new(),
        }
    }

    /// Append a detail line
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }
}

impl Report for SimpleResponse {
    fn success(&self) -> bool {
        true
    }

    fn human(&self, _output: &OutputManager) -> Vec<String> {
        std::iter::once(self.message.clone())
            .chain(self.details.iter().map(|detail| format!("  {detail}")))
            .collect()
    }
}
