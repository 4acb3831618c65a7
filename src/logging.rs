//! Tracing-based logging to stderr

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `FOLIO_LOG=folio=debug`
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Initialise logging.
///
/// Uses `FOLIO_LOG` if set, otherwise `warn`, or `debug` for folio itself with `--verbose`.
pub fn init(verbose: bool) {
    let filter = if std::env::var(LOG_ENV).is_ok() {
        EnvFilter::from_env(LOG_ENV)
    } else if verbose {
        EnvFilter::new("warn,folio=debug")
    } else {
        EnvFilter::new("warn")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
