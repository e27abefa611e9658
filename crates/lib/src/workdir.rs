//! Scoped changes of the process working directory.
//!
//! The working directory is process-wide state. Every change goes through a
//! [`WorkdirGuard`], which puts the previous directory back when it is
//! dropped, so early returns and `?` cannot leave the process elsewhere.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Restores the captured working directory on drop.
#[must_use = "the previous directory is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct WorkdirGuard {
  previous: PathBuf,
}

impl WorkdirGuard {
  /// Change into `dir`, remembering where we were.
  ///
  /// # Errors
  ///
  /// Returns an error if the current directory cannot be read or `dir`
  /// cannot be entered. The working directory is unchanged in that case.
  pub fn enter(dir: impl AsRef<Path>) -> io::Result<Self> {
    let dir = dir.as_ref();
    let previous = std::env::current_dir()?;
    std::env::set_current_dir(dir)?;
    debug!(from = %previous.display(), to = %dir.display(), "entered directory");
    Ok(Self { previous })
  }
}

impl Drop for WorkdirGuard {
  fn drop(&mut self) {
    match std::env::set_current_dir(&self.previous) {
      Ok(()) => debug!(to = %self.previous.display(), "restored directory"),
      Err(e) => warn!(
        path = %self.previous.display(),
        error = %e,
        "failed to restore working directory"
      ),
    }
  }
}
