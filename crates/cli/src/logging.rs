//! Logging configuration for the updater
//!
//! Verbosity maps to a level filter: no flag logs warnings only, `-v` adds
//! informational messages, `-vv` and up adds debug detail. The subscriber is
//! handed to the caller instead of being installed globally, so a run can be
//! scoped with `tracing::subscriber::with_default`.

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
  pub level: LevelFilter,
  pub ansi: bool,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self::from_verbosity(0)
  }
}

impl LogConfig {
  /// Map a `-v` count to a level
  pub fn from_verbosity(verbosity: u8) -> Self {
    let level = match verbosity {
      0 => LevelFilter::WARN,
      1 => LevelFilter::INFO,
      _ => LevelFilter::DEBUG,
    };
    Self { level, ansi: false }
  }

  /// Build a subscriber writing `LEVEL message` lines to `writer`.
  ///
  /// The filter is built from the configured level alone; RUST_LOG is ignored.
  pub fn subscriber<W>(&self, writer: W) -> impl Subscriber + Send + Sync + 'static
  where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
  {
    let filter = EnvFilter::builder()
      .with_default_directive(self.level.into())
      .parse_lossy("");

    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(writer)
      .with_ansi(self.ansi)
      .with_target(false)
      .without_time()
      .finish()
  }

  /// Subscriber for CLI runs (stderr)
  pub fn stderr_subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
    self.subscriber(std::io::stderr)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_verbosity_levels() {
    assert_eq!(LogConfig::from_verbosity(0).level, LevelFilter::WARN);
    assert_eq!(LogConfig::from_verbosity(1).level, LevelFilter::INFO);
    assert_eq!(LogConfig::from_verbosity(2).level, LevelFilter::DEBUG);
    assert_eq!(LogConfig::from_verbosity(3).level, LevelFilter::DEBUG);
    assert_eq!(LogConfig::from_verbosity(u8::MAX).level, LevelFilter::DEBUG);
  }

  #[test]
  fn test_default_is_warn_without_color() {
    let config = LogConfig::default();
    assert_eq!(config.level, LevelFilter::WARN);
    assert!(!config.ansi);
  }
}
