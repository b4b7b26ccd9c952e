//! Tracing subscriber set-up.
//!
//! Logs go to stderr so command output on stdout stays pipeable.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default level for a given number of `-v` flags.
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn filter_for(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("promptline={}", level)))
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flags.
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init_logging(verbose: u8) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose > 0)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(layer)
        .with(filter_for(level_for_verbosity(verbose)))
        .try_init();
}
