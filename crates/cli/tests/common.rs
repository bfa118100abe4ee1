//! Common test utilities for updater integration tests

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use cli::{LogConfig, UpdateSummary, cmd_add_inclusions};
use inclusions_core::UpdaterConfig;
use tempfile::TempDir;

/// In-memory sink for captured log lines
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl LogBuffer {
  pub fn contents(&self) -> String {
    String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
  }
}

/// Create an empty project directory and an updater config targeting it
#[allow(dead_code)]
pub fn create_test_project() -> (TempDir, UpdaterConfig) {
  let project_dir = TempDir::new().expect("Failed to create project temp dir");
  let config = UpdaterConfig::for_project(project_dir.path());
  (project_dir, config)
}

/// Write a settings file (creating `.zed/`) and return its path
#[allow(dead_code)]
pub fn write_settings<'a>(config: &'a UpdaterConfig, contents: &str) -> &'a Path {
  let path = config.settings_path.as_path();
  std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create settings dir");
  std::fs::write(path, contents).expect("Failed to write settings");
  path
}

/// Run the updater at `verbosity`, capturing everything it logs
#[allow(dead_code)]
pub fn run_captured(config: &UpdaterConfig, verbosity: u8) -> (anyhow::Result<UpdateSummary>, String) {
  let buffer = LogBuffer::default();
  let writer = buffer.clone();
  let subscriber = LogConfig::from_verbosity(verbosity).subscriber(move || writer.clone());

  let result = tracing::subscriber::with_default(subscriber, || cmd_add_inclusions(config));
  (result, buffer.contents())
}
