//! cargo-asil - command-line front end for ISO 26262 ASIL tags
//!
//! Wraps the `asil-integrity` engine for use from shells, build scripts and
//! CI jobs: validate tags, print their canonical form, rank them and check
//! decomposition inheritance between a parent and a child requirement.

#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod helpers;

use std::path::Path;

use anyhow::Result;

use crate::{
    cli::Cli,
    helpers::{
        load_config_file,
        load_config_from,
        GlobalArgs,
    },
};

/// Load configuration, merge it with `cli` and run the selected command.
///
/// `workdir` is where configuration files are looked up and written.
pub fn run(cli: &Cli, workdir: &Path) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config_file(workdir)?,
    };
    let global = GlobalArgs::from_cli(cli, &config)?;
    tracing::debug!(?global, "resolved global arguments");

    commands::execute(&cli.command, &global, workdir)
}
