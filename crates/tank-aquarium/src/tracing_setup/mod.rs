//! Tracing setup: structured logging for the engine and the shell.

use tank_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `TANK_LOG` environment variable for filtering.
/// Defaults to `info` level if not set.
pub fn init_tracing() -> bool {
    init_from_config(&ObservabilityConfig {
        json: true,
        ..ObservabilityConfig::default()
    })
}

/// Initialize tracing from config. `TANK_LOG` still wins over `log_level`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env("TANK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    if config.json {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
            .is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
