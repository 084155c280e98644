//! Logging setup
//!
//! Library code logs through `tracing`; the binary installs a stderr
//! subscriber here. `RUST_LOG` takes precedence over the CLI verbosity.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map the number of `-v` flags to a filter directive.
///
/// The floor is `warn`, so recovered scan failures are always reported.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirmap={}", level_for_verbosity(verbosity))))
}

/// Install the global stderr subscriber. Later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    let _ = tracing_subscriber::registry()
        .with(build_env_filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .without_time(),
        )
        .try_init();
}
