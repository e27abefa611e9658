use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::patch::{PatchError, write_atomic};

/// Pin `dependency` to `version` in the npm manifest at `path`.
///
/// Key order is preserved and the file is written back with two-space
/// indentation. Returns the previous version string, if it was one.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, is not valid
/// JSON, or has no `dependencies.<dependency>` entry.
pub fn pin_dependency(path: &Path, dependency: &str, version: &str) -> Result<Option<String>, PatchError> {
  let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let mut manifest: Value = serde_json::from_str(&content).map_err(|source| PatchError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  let missing = |field: String| PatchError::MissingField {
    path: path.to_path_buf(),
    field,
  };

  let entry = manifest
    .get_mut("dependencies")
    .and_then(Value::as_object_mut)
    .ok_or_else(|| missing("dependencies".to_string()))?
    .get_mut(dependency)
    .ok_or_else(|| missing(format!("dependencies.{}", dependency)))?;

  let previous = entry.as_str().map(str::to_owned);
  *entry = Value::String(version.to_string());

  let mut pretty = serde_json::to_string_pretty(&manifest).map_err(|source| PatchError::Parse {
    path: path.to_path_buf(),
    source,
  })?;
  pretty.push('\n');

  write_atomic(path, &pretty)?;
  Ok(previous)
}
