//! Logging initialization.
//!
//! Controlled by `WIT_LOG`, using `EnvFilter` directives (e.g. `debug` or
//! `wit::areas=debug`). Defaults to `warn`. Events go to stderr so command
//! output on stdout stays byte-exact.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "WIT_LOG";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
