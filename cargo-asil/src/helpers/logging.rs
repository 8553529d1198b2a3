//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout stays parseable in JSON mode.

use std::env;

use tracing_subscriber::EnvFilter;

/// Initialize the tracing system for logging
///
/// `RUST_LOG` selects the filter (default `warn`, or `debug` when verbose)
/// and `ASIL_LOG_FORMAT` the format: `pretty`, `compact` or `json`.
pub fn initialize_tracing(verbose: bool) {
    let format = env::var("ASIL_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match format.as_str() {
        "json" => subscriber.json().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.pretty().init(),
    }
}
