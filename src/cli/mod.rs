pub mod commands;
pub mod handlers;
pub mod output;

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `OV_LOG=osint_vault=debug`.
pub const LOG_ENV: &str = "OV_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Install the stderr subscriber. `OV_LOG` wins over the workspace's
/// `[log] level`; a filter that fails to parse falls back to `warn`.
pub fn init_logging(start: &Path) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = crate::io::workspace_io::configured_log_level(start)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
