//! Logging setup for the workout binary.
//!
//! Logs go to stderr so rendered workouts on stdout stay pipeable.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when RUST_LOG is unset or invalid
const DEFAULT_LEVEL: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber: RUST_LOG filtering, compact stderr output
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Initialize logging for testing (captures logs for test output)
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_warn() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(env_filter().to_string(), "warn");
        }
    }
}
