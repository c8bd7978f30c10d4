//! Log setup
//!
//! Logs go to stderr so they never mix with spelled output. The level comes from
//! the `-v` count only.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbosity: u8) {
    tracing_subscriber::registry()
        .with(EnvFilter::new(level_for(verbosity)))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .ok();
}
