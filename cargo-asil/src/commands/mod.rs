//! Command implementations for cargo-asil
//!
//! Each command builds a [`Report`](crate::helpers::Report); [`execute`]
//! dispatches a parsed command and emits its report.

pub mod ranking;
pub mod tags;
pub mod verify;

use std::path::Path;

use anyhow::Result;

pub use ranking::{
    cmd_compare,
    cmd_highest,
    CompareReport,
    HighestReport,
};
pub use tags::{
    cmd_canonicalize,
    cmd_validate,
    CanonicalizeReport,
    TagReport,
    ValidateReport,
};
pub use verify::{
    cmd_verify,
    VerifyReport,
};

use crate::{
    cli::Commands,
    helpers::{
        init_config_file,
        GlobalArgs,
        SimpleResponse,
    },
};

/// Run `command` and print its report.
///
/// Returns the report's success flag, which the binary maps to its exit
/// status.
pub fn execute(command: &Commands, global: &GlobalArgs, workdir: &Path) -> Result<bool> {
    let output = &global.output;
    match command {
        Commands::Validate { tags } => output.emit(&cmd_validate(tags, global)),
        Commands::Canonicalize { tags } => output.emit(&cmd_canonicalize(tags)?),
        Commands::Verify { parent, child } => output.emit(&cmd_verify(parent, child)?),
        Commands::Compare { left, right } => output.emit(&cmd_compare(left, right)?),
        Commands::Highest { tags } => output.emit(&cmd_highest(tags)?),
        Commands::InitConfig { force } => {
            let path = init_config_file(workdir, *force)?;
            output.emit(&SimpleResponse::new(format!(
                "Created configuration file: {}",
                path.display()
            )))
        },
    }
}
