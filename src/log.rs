// src/log.rs
use tracing_subscriber::{EnvFilter, fmt};

#[doc(hidden)]
pub use tracing;

/// Environment variable holding an `EnvFilter` directive, e.g. `kaspi_track=debug`.
pub const LOG_ENV: &str = "KASPI_TRACK_LOG";

/// Install a stderr subscriber. Stdout is left for report output.
///
/// `verbose` raises the fallback level from `warn` to `debug`; an explicit
/// `KASPI_TRACK_LOG` always wins. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let fallback = if verbose { "kaspi_track=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
