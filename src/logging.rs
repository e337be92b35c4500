//! Tracing setup. Everything goes to stderr: stdout carries the launcher
//! JSON and must stay clean.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "WSFLOW_LOG";

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("wsflow=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    // A second init (tests) is not an error worth reporting.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
