//! Tracing subscriber setup for the `nasalis` binary.
//!
//! Logs go to stderr so that tables and plots on stdout stay pipeable.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` switches this crate to debug.
pub fn init_cli_logger(verbose: bool) {
    let default_filter = if verbose {
        "nasalis_growth=debug,warn"
    } else {
        "nasalis_growth=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
