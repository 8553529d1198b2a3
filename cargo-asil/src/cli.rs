//! Command-line definition for cargo-asil

use std::path::PathBuf;

use clap::{
    Parser,
    Subcommand,
};

/// ASIL tag tool - validate, canonicalize and check ISO 26262 integrity tags
#[derive(Parser, Debug)]
#[command(name = "cargo-asil")]
#[command(
    version,
    about = "Validate, canonicalize and check ISO 26262 ASIL tags",
    long_about = "
Validate, canonicalize and check ISO 26262 ASIL tags

Usage:
  cargo-asil <COMMAND>          # Direct usage
  cargo asil <COMMAND>          # As Cargo subcommand

Examples:
  cargo-asil validate 'ASIL_D' 'asild (qm)' 'ASIL-E'
  cargo-asil canonicalize ' asil-b ( d )'
  cargo-asil verify --parent 'ASIL D' --child 'ASIL B(D)'
  cargo-asil compare 'ASIL C' 'ASIL B(D)'
  cargo-asil highest QM 'ASIL A' 'ASIL C(D)'

Output Formats:
  --output human        Human-readable with colors (default)
  --output json         JSON for tooling

Logging:
  RUST_LOG=debug        Log level filter (default: warn, debug with --verbose)
  ASIL_LOG_FORMAT=json  Log format: pretty (default), compact or json
"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Output format for results
    #[arg(long, global = true, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Keep and report the verbatim input text of each tag
    #[arg(long, global = true)]
    pub keep_original: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (default: .cargo-asil.toml lookup)
    #[arg(long, global = true, env = "CARGO_ASIL_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available output formats
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormatArg {
    /// Human-readable format with colors (default)
    Human,
    /// JSON format for tooling integration
    Json,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether each tag is a valid ASIL tag
    Validate {
        /// Tags to check
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Print the canonical form of each tag
    Canonicalize {
        /// Tags to canonicalize
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Check that a child integrity is a valid decomposition of its parent
    Verify {
        /// Integrity of the parent requirement
        #[arg(long)]
        parent: String,

        /// Integrity of the child requirement
        #[arg(long)]
        child: String,
    },

    /// Compare the rank of two tags
    Compare {
        /// Left-hand tag
        left: String,

        /// Right-hand tag
        right: String,
    },

    /// Print the highest integrity among the given tags
    Highest {
        /// Tags to rank
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Write a default configuration file
    InitConfig {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Parse command line arguments, handling both `cargo-asil` and `cargo asil`
/// patterns
#[must_use]
pub fn parse_args() -> Cli {
    parse_from(std::env::args())
}

/// Parse an explicit argument list, dropping the `asil` word Cargo inserts
/// when running as a subcommand.
pub fn parse_from<I>(args: I) -> Cli
where
    I: IntoIterator<Item = String>,
{
    let mut args: Vec<String> = args.into_iter().collect();

    // Pattern: ["cargo-asil", "asil", "validate", ...] vs ["cargo-asil", "validate", ...]
    if args.get(1).is_some_and(|arg| arg == "asil") {
        args.remove(1);
        if args.len() == 1 {
            args.push("--help".to_string());
        }
    }

    Cli::parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_direct_invocation() {
        let cli = parse_from(args(&["cargo-asil", "validate", "ASIL D"]));
        assert!(matches!(cli.command, Commands::Validate { ref tags } if tags == &["ASIL D"]));
    }

    #[test]
    fn test_cargo_subcommand_invocation() {
        let cli = parse_from(args(&[
            "cargo-asil",
            "asil",
            "verify",
            "--parent",
            "ASIL D",
            "--child",
            "ASIL B(D)",
            "--output",
            "json",
        ]));
        assert_eq!(cli.output, Some(OutputFormatArg::Json));
        assert!(matches!(
            cli.command,
            Commands::Verify { ref parent, ref child } if parent == "ASIL D" && child == "ASIL B(D)"
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse_from(args(&["cargo-asil", "highest", "QM", "--keep-original", "-v"]));
        assert!(cli.keep_original);
        assert!(cli.verbose);
    }
}
