//! Add scan inclusions to the project settings file

use anyhow::{Context, Result};
use inclusions_core::{Document, Membership, UpdaterConfig, merge_inclusions};
use tracing::{debug, info};

/// What a run changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
  /// The settings file did not exist and was created empty
  pub created: bool,
  /// Entries appended to the inclusion list
  pub added: Vec<String>,
}

impl UpdateSummary {
  /// Whether the settings file was rewritten with new entries
  pub fn modified(&self) -> bool {
    !self.added.is_empty()
  }
}

/// Ensure every configured inclusion is present in the settings file.
///
/// Creates the file (and its directory) when missing, then appends missing
/// entries and saves only if something was added.
pub fn cmd_add_inclusions(config: &UpdaterConfig) -> Result<UpdateSummary> {
  let path = &config.settings_path;

  let created = Document::ensure_exists(path).with_context(|| format!("Failed to create {}", path.display()))?;
  if created {
    info!("Created {}", path.display());
  }

  let mut settings = Document::load(path).context("Failed to load settings")?;

  let outcome = merge_inclusions(settings.list(&config.key), &config.inclusions);
  for (inclusion, membership) in &outcome.decisions {
    match membership {
      Membership::Added => info!("Added: {}", inclusion),
      Membership::Present => debug!("Already exists: {}", inclusion),
    }
  }

  let summary = UpdateSummary {
    created,
    added: outcome.added().into_iter().map(String::from).collect(),
  };

  if !outcome.modified() {
    debug!("No changes needed");
    return Ok(summary);
  }

  settings.set_list(&config.key, outcome.entries);
  settings
    .save(path)
    .with_context(|| format!("Failed to save {}", path.display()))?;
  info!("Updated {}", path.display());

  Ok(summary)
}
