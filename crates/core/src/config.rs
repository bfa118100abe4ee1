//! Updater configuration.
//!
//! Everything is built in: the settings file lives at `.zed/settings.json`
//! relative to the project root, and the updater guarantees a fixed set of
//! scan inclusions. Nothing is read from files or the environment.

use std::path::{Path, PathBuf};

// ============================================================================
// Defaults
// ============================================================================

/// Directory holding the editor's project-local settings
pub const SETTINGS_DIR: &str = ".zed";

/// Settings file name inside [`SETTINGS_DIR`]
pub const SETTINGS_FILE: &str = "settings.json";

/// Key of the inclusion list inside the settings document
pub const SCAN_INCLUSIONS_KEY: &str = "file_scan_inclusions";

/// Patterns the updater guarantees are present, in append order
pub const DESIRED_INCLUSIONS: &[&str] = &["**/.nearwait.yml"];

// ============================================================================
// Updater Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
  /// Settings file to create or update
  pub settings_path: PathBuf,

  /// Key of the list field to merge into
  pub key: String,

  /// Entries to ensure are present
  pub inclusions: Vec<String>,
}

impl Default for UpdaterConfig {
  fn default() -> Self {
    Self {
      settings_path: Path::new(SETTINGS_DIR).join(SETTINGS_FILE),
      key: SCAN_INCLUSIONS_KEY.to_string(),
      inclusions: DESIRED_INCLUSIONS.iter().map(|s| s.to_string()).collect(),
    }
  }
}

impl UpdaterConfig {
  /// Config targeting the settings file under `project_root`
  pub fn for_project(project_root: &Path) -> Self {
    Self {
      settings_path: Self::settings_path_for(project_root),
      ..Default::default()
    }
  }

  /// Get the settings file path for a project
  pub fn settings_path_for(project_root: &Path) -> PathBuf {
    project_root.join(SETTINGS_DIR).join(SETTINGS_FILE)
  }
}
