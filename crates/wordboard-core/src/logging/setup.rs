use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Initialize the wordboard tracing/logging system.
///
/// Reads the `WORDBOARD_LOG` environment variable for per-target log levels.
/// Format: `WORDBOARD_LOG=wordboard_storage=debug,wordboard_core=warn`
///
/// Falls back to `wordboard=info` if `WORDBOARD_LOG` is not set or is invalid.
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| install(env_filter(), false));
}

/// Same filter resolution as [`init_tracing`], emitted as JSON lines.
pub fn init_json_tracing() {
    INIT.call_once(|| install(env_filter(), true));
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("WORDBOARD_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
