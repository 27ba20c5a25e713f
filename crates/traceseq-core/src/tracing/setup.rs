//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the traceseq tracing/logging system.
///
/// Reads `TRACESEQ_LOG` for per-target log levels, e.g.
/// `TRACESEQ_LOG=traceseq_storage=debug,traceseq_lineage=warn`.
///
/// Falls back to `traceseq=info` if `TRACESEQ_LOG` is not set or is invalid.
///
/// This function is idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        install(filter);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
///
/// Shares the same once-guard as [`init_tracing`]; whichever runs first wins.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    INIT.call_once(|| install(filter));
}

fn install(filter: EnvFilter) {
    // A host application may already own the global subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}
