//! Scan inclusions updater - shared command and logging setup

pub mod commands;
pub mod logging;

use anyhow::Result;
use inclusions_core::UpdaterConfig;

pub use commands::{UpdateSummary, cmd_add_inclusions};
pub use logging::LogConfig;

/// Run the updater with logging scoped to this call
pub fn run(config: &UpdaterConfig, log: &LogConfig) -> Result<UpdateSummary> {
  tracing::subscriber::with_default(log.stderr_subscriber(), || cmd_add_inclusions(config))
}
