//! CLI commands for the delivery operations dashboard.

pub mod report;
pub mod seed;

pub use report::{run_report, ReportArgs};
pub use seed::run_seed;

use rota_ops_core::{AppConfig, ConfigLoader};

/// Loads the merged configuration, falling back to defaults when no config
/// file is present.
pub(crate) fn load_config() -> AppConfig {
    ConfigLoader::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to default configuration");
        AppConfig::default()
    })
}
