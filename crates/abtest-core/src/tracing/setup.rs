//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the abtest tracing/logging system.
///
/// Reads `ABTEST_LOG` for per-crate log levels.
/// Format: `ABTEST_LOG=abtest_analysis=debug,abtest_core=warn`
///
/// Falls back to `abtest=info` if `ABTEST_LOG` is not set or is invalid.
/// Log lines go to stderr so stdout carries only results.
///
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV_VAR).ok();
        let filter = build_filter(raw.as_deref());

        // Another subscriber may already be installed (e.g. by a test harness).
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

/// Parse an `ABTEST_LOG` value into a filter.
/// Unset, blank, or unparseable values give `abtest=info`.
pub fn build_filter(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
