//! Lines the installer owns inside files it does not.
//!
//! Every line we write carries a marker (for shell profiles, the name of the
//! exported variable). Rewriting drops all marked lines and appends the
//! current ones, so repeated runs never stack duplicates.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::patch::{PatchError, write_atomic};

/// Compute new file content from `existing`.
///
/// Keeps every line of `existing` that does not contain `marker`, in order
/// and with its original line ending, then appends `new_lines` when
/// `enabled`. An empty marker matches nothing. Appended lines end in `\n`.
pub fn apply_managed_lines<S: AsRef<str>>(existing: &str, marker: &str, new_lines: &[S], enabled: bool) -> String {
  let mut content = String::with_capacity(existing.len());

  for line in existing.split_inclusive('\n') {
    if marker.is_empty() || !line.contains(marker) {
      content.push_str(line);
    }
  }

  if enabled && !new_lines.is_empty() {
    if !content.is_empty() && !content.ends_with('\n') {
      content.push('\n');
    }
    for line in new_lines {
      content.push_str(line.as_ref());
      content.push('\n');
    }
  }

  content
}

/// Rewrite the managed lines of the file at `path`.
///
/// A missing file reads as empty. The file is only written when its content
/// changes, and then through a temporary file so a failed write leaves the
/// original intact.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or the new
/// content cannot be written.
pub fn apply_managed_block<S: AsRef<str>>(
  path: &Path,
  marker: &str,
  new_lines: &[S],
  enabled: bool,
) -> Result<(), PatchError> {
  let existing = match fs::read_to_string(path) {
    Ok(content) => content,
    Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
    Err(source) => {
      return Err(PatchError::Read {
        path: path.to_path_buf(),
        source,
      });
    }
  };

  let content = apply_managed_lines(&existing, marker, new_lines, enabled);

  if content == existing {
    debug!(path = %path.display(), marker, "managed block already up to date");
    return Ok(());
  }

  write_atomic(path, &content)?;
  debug!(path = %path.display(), marker, enabled, "rewrote managed block");
  Ok(())
}
