//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Initialize the rotation tracing/logging system.
///
/// Reads the `ROTATION_LOG` environment variable for per-module log levels,
/// e.g. `ROTATION_LOG=rotation_policy=debug,rotation_sim=info`.
///
/// Falls back to `rotation=info` if `ROTATION_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_LOG_FILTER);
}

/// Like [`init_tracing`], but with a caller-supplied fallback filter
/// (used when the filter comes from configuration).
pub fn init_tracing_with_default(default_filter: &str) {
    INIT.call_once(|| {
        let env_directives = std::env::var("ROTATION_LOG").ok();
        let filter = build_filter(env_directives.as_deref(), default_filter);

        // A subscriber installed elsewhere (e.g. by an embedding binary) wins.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Resolve the log filter: `env_directives` if it parses, else
/// `default_filter` if it parses, else `rotation=info`.
pub fn build_filter(env_directives: Option<&str>, default_filter: &str) -> EnvFilter {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_filter).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
