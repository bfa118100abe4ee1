use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Not found: {}", .path.display())]
  NotFound { path: PathBuf },

  #[error("Invalid JSON in {}: {source}", .path.display())]
  Decode {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Encode settings: {0}")]
  Encode(#[source] serde_json::Error),

  #[error("Not a JSON object: {}", .path.display())]
  NotAnObject { path: PathBuf },

  #[error("IO {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl Error {
  pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Error::Io {
      path: path.into(),
      source,
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;
