//! cargo-asil binary entry point

use std::process;

use anyhow::{
    Context,
    Result,
};
use cargo_asil::{
    cli::parse_args,
    helpers::initialize_tracing,
};
use colored::Colorize;

fn main() {
    let cli = parse_args();
    initialize_tracing(cli.verbose);

    match try_main(&cli) {
        Ok(true) => {},
        Ok(false) => process::exit(1),
        Err(error) => {
            tracing::error!("{error:#}");
            eprintln!("{} {error:#}", "error:".bright_red().bold());
            process::exit(1);
        },
    }
}

fn try_main(cli: &cargo_asil::cli::Cli) -> Result<bool> {
    let workdir = std::env::current_dir().context("Failed to get current directory")?;
    cargo_asil::run(cli, &workdir)
}
