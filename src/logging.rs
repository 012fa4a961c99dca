//! Tracing setup for the `budget` binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Directive for a given `-v` count
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "budget_tracker=warn",
        1 => "budget_tracker=info",
        _ => "budget_tracker=debug",
    }
}

/// Install the global subscriber once. `RUST_LOG` takes precedence over the
/// verbosity flag. Output goes to stderr so reports on stdout stay clean.
pub fn init(verbosity: u8) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
