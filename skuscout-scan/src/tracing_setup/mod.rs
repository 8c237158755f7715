//! Tracing initialization and span helpers.

pub mod spans;

use std::sync::Once;

use skuscout_core::config::ObservabilityConfig;
use skuscout_core::constants::ENV_LOG;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging with the default level.
///
/// Reads `SKUSCOUT_LOG` for per-target levels, e.g.
/// `SKUSCOUT_LOG=skuscout_scan=debug,skuscout_retry=warn`.
/// Falls back to `skuscout=info`. Idempotent.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize logging, falling back to `skuscout=<log_level>` when
/// `SKUSCOUT_LOG` is unset or invalid. Only the first call takes effect.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_LOG)
            .unwrap_or_else(|_| EnvFilter::new(format!("skuscout={}", config.log_level)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
