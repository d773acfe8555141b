//! Diagnostic logging.
//!
//! User-facing output goes through `ui::messages`; this module only sets up
//! the `tracing` subscriber used for debug diagnostics on stderr.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `rattendance=trace`.
pub const LOG_ENV: &str = "RATTENDANCE_LOG";

/// Map the number of `-v` flags to a level.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber. `RATTENDANCE_LOG` wins over `-v`.
/// Calling it twice is harmless.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose).as_str().to_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
