//! Settings document store
//!
//! A settings file is an untyped JSON object. Loading keeps every field exactly
//! as encoded; saving rewrites the whole file through a temp file in the same
//! directory so readers never see a half-written document.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Top-level JSON object of a settings file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
  fields: Map<String, Value>,
}

impl From<Map<String, Value>> for Document {
  fn from(fields: Map<String, Value>) -> Self {
    Self { fields }
  }
}

impl Document {
  /// Load and parse a settings file
  pub fn load(path: &Path) -> Result<Self> {
    let contents = fs::read_to_string(path).map_err(|source| match source.kind() {
      std::io::ErrorKind::NotFound => Error::NotFound {
        path: path.to_path_buf(),
      },
      _ => Error::io(path, source),
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|source| Error::Decode {
      path: path.to_path_buf(),
      source,
    })?;

    match value {
      Value::Object(fields) => Ok(Self { fields }),
      _ => Err(Error::NotAnObject {
        path: path.to_path_buf(),
      }),
    }
  }

  /// Render as two-space indented JSON with a trailing newline
  pub fn render(&self) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&self.fields).map_err(Error::Encode)?;
    out.push('\n');
    Ok(out)
  }

  /// Save to `path`, replacing the whole file.
  ///
  /// A symlinked `path` is resolved first so the link's target is rewritten and
  /// the link stays in place. The parent directory must already exist.
  pub fn save(&self, path: &Path) -> Result<()> {
    let contents = self.render()?;

    let target = match fs::canonicalize(path) {
      Ok(resolved) => resolved,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => path.to_path_buf(),
      Err(e) => return Err(Error::io(path, e)),
    };
    let dir = match target.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(contents.as_bytes()).map_err(|e| Error::io(&target, e))?;

    // Keep the mode of the file being replaced
    if let Ok(meta) = fs::metadata(&target) {
      tmp
        .as_file()
        .set_permissions(meta.permissions())
        .map_err(|e| Error::io(&target, e))?;
    }

    tmp.persist(&target).map_err(|e| Error::io(&target, e.error))?;
    Ok(())
  }

  /// Create `path` holding an empty object if it does not exist yet.
  ///
  /// Parent directories are created as needed and the file gets the default
  /// mode of a plain create. Returns true if the file was created.
  pub fn ensure_exists(path: &Path) -> Result<bool> {
    if path.exists() {
      return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    fs::write(path, Document::default().render()?).map_err(|e| Error::io(path, e))?;
    Ok(true)
  }

  pub fn get(&self, key: &str) -> Option<&Value> {
    self.fields.get(key)
  }

  /// Array stored at `key`, or None if the key is absent or not an array
  pub fn list(&self, key: &str) -> Option<&[Value]> {
    self.get(key).and_then(Value::as_array).map(Vec::as_slice)
  }

  /// Replace the value at `key` with `entries`, keeping the key's position
  pub fn set_list(&mut self, key: &str, entries: Vec<Value>) {
    self.fields.insert(key.to_string(), Value::Array(entries));
  }

  #[cfg(test)]
  pub(crate) fn as_map(&self) -> &Map<String, Value> {
    &self.fields
  }
}
