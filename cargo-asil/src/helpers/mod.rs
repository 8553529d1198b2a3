//! Helper modules for cargo-asil command implementations
//!
//! Configuration loading, global argument merging, output rendering and
//! logging setup shared by every command.

pub mod config;
pub mod global_args;
pub mod logging;
pub mod output;

#[cfg(test)]
mod tests;

pub use config::{
    init_config_file,
    load_config_file,
    load_config_from,
    CargoAsilConfig,
    ConfigError,
};
pub use global_args::GlobalArgs;
pub use logging::initialize_tracing;
pub use output::{
    OutputFormat,
    OutputManager,
    Report,
    SimpleResponse,
};
