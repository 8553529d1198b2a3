//! Configuration management utilities
//!
//! Loads the optional `cargo-asil.toml` file. Command-line flags take
//! precedence over file values, which take precedence over defaults.

use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    Context,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::output::OutputFormat;

/// File names searched, in order, relative to the working directory
pub const CONFIG_FILE_NAMES: [&str; 3] = [
    ".cargo-asil.toml",
    "cargo-asil.toml",
    ".config/cargo-asil.toml",
];

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `output_format` names no known format
    #[error("unknown output format '{0}', expected 'human' or 'json'")]
    UnknownOutputFormat(String),

    /// `init-config` would overwrite an existing file
    #[error("configuration file already exists: {}. Use --force to overwrite", .0.display())]
    AlreadyExists(PathBuf),
}

/// Standard configuration structure for cargo-asil
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CargoAsilConfig {
    /// Default output format preference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,

    /// Keep the verbatim input text of each tag by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_original: Option<bool>,

    /// Force colored output on or off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

impl CargoAsilConfig {
    /// Configuration written by `init-config`
    #[must_use]
    pub fn sample() -> Self {
        Self {
            output_format: Some("human".to_string()),
            keep_original: Some(false),
            color:         None,
        }
    }

    /// Output format named in the file, if any.
    pub fn output_format(&self) -> Result<Option<OutputFormat>, ConfigError> {
        self.output_format.as_deref().map(str::parse::<OutputFormat>).transpose()
    }
}

/// Load configuration from the first config file found under `root`
///
/// Returns the default configuration when no file exists.
pub fn load_config_file(root: &Path) -> Result<CargoAsilConfig> {
    for name in CONFIG_FILE_NAMES {
        let config_path = root.join(name);
        if config_path.exists() {
            return load_config_from(&config_path);
        }
    }

    tracing::debug!(root = %root.display(), "no configuration file found");
    Ok(CargoAsilConfig::default())
}

/// Load configuration from an explicit path
pub fn load_config_from(config_path: &Path) -> Result<CargoAsilConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let config: CargoAsilConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), ?config, "loaded configuration");
    Ok(config)
}

/// Initialize a sample configuration file
pub fn init_config_file(root: &Path, force: bool) -> Result<PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        return Err(ConfigError::AlreadyExists(config_path).into());
    }

    let content = toml::to_string_pretty(&CargoAsilConfig::sample())
        .context("Failed to serialize default configuration")?;

    std::fs::write(&config_path, content)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    Ok(config_path)
}
