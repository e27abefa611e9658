//! Idempotent rewrites of files outside the checkouts.
//!
//! Three files get patched, each so that running the installer again leaves
//! the same result as running it once:
//! - shell profiles, through marked lines (`managed`)
//! - the macOS port-forwarding rule file, recreated or deleted whole (`firewall`)
//! - the platform UI's `package.json`, with one dependency pinned (`manifest`)

mod firewall;
mod managed;
mod manifest;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

pub use firewall::FirewallRuleFile;
pub use managed::{apply_managed_block, apply_managed_lines};
pub use manifest::pin_dependency;

/// Errors that can occur while patching a file.
#[derive(Debug, Error)]
pub enum PatchError {
  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: std::io::Error },

  #[error("failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },

  #[error("failed to remove {}: {source}", path.display())]
  Remove { path: PathBuf, source: std::io::Error },

  #[error("failed to parse {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("{} has no '{field}' entry", path.display())]
  MissingField { path: PathBuf, field: String },
}

/// Replace the file at `path` with `content` without a truncated intermediate.
///
/// Symlinks are followed so the link itself survives, and an existing file
/// keeps its permissions.
fn write_atomic(path: &Path, content: &str) -> Result<(), PatchError> {
  let write_err = |source| PatchError::Write {
    path: path.to_path_buf(),
    source,
  };

  let target = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
  let dir = target
    .parent()
    .filter(|p| !p.as_os_str().is_empty())
    .unwrap_or_else(|| Path::new("."));

  let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
  if let Ok(meta) = fs::metadata(&target) {
    temp.as_file().set_permissions(meta.permissions()).map_err(write_err)?;
  }
  temp.write_all(content.as_bytes()).map_err(write_err)?;
  temp.as_file().sync_all().map_err(write_err)?;
  temp.persist(&target).map_err(|e| write_err(e.error))?;

  Ok(())
}
