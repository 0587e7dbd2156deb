//! Diagnostic logging to stderr.
//!
//! User-facing output goes to stdout through the theme helpers; `tracing`
//! events are for diagnosing the editor itself.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level for a count of `-v` flags: none is WARN, one INFO, two or more DEBUG.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber. `RUST_LOG` directives are honored on top
/// of the verbosity level.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}
