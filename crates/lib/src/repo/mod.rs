//! Bringing a local checkout in line with its remote.
//!
//! A missing checkout is cloned. An existing git checkout is updated, kept or
//! the install aborted, as the [`DecisionProvider`] answers. Anything else at
//! the checkout path is left alone and reported as a conflict.

mod decision;
mod state;

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::execute::{CommandRunner, CommandSpec, ExecError, run_all};
use crate::workdir::WorkdirGuard;

pub use decision::{DecisionProvider, FixedDecision, UserDecision, prompt_decision};
pub use state::RepoState;

/// What [`RepoSync::synchronize`] did to the checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
  Cloned,
  Updated,
  Ignored,
}

/// Errors that can occur while synchronizing a checkout.
#[derive(Debug, Error)]
pub enum SyncError {
  #[error("'{}' exists but is not a git repository", path.display())]
  Conflict { path: PathBuf },

  #[error("aborted by user at existing repository '{repo}'")]
  Aborted { repo: String },

  #[error("failed to enter repository {}: {source}", path.display())]
  Workdir { path: PathBuf, source: std::io::Error },

  #[error(transparent)]
  Exec(#[from] ExecError),
}

/// Remote URL of `repo` under `remote_base` (e.g. `https://github.com/xtclang`).
pub fn remote_url(remote_base: &str, repo: &str) -> String {
  format!("{}/{}.git", remote_base.trim_end_matches('/'), repo)
}

/// Synchronizes checkouts below the current working directory.
pub struct RepoSync<'a> {
  runner: &'a dyn CommandRunner,
  decisions: &'a dyn DecisionProvider,
}

impl<'a> RepoSync<'a> {
  pub fn new(runner: &'a dyn CommandRunner, decisions: &'a dyn DecisionProvider) -> Self {
    Self { runner, decisions }
  }

  /// Clone, update or keep the checkout `repo_name` in the current directory.
  ///
  /// The working directory is the same when this returns as when it was
  /// called, whatever the outcome.
  ///
  /// # Errors
  ///
  /// Returns an error if the path holds something other than a git checkout,
  /// the user aborts, or a git command fails.
  pub fn synchronize(&self, repo_name: &str, remote_url: &str) -> Result<SyncOutcome, SyncError> {
    let path = PathBuf::from(repo_name);

    match RepoState::inspect(&path) {
      RepoState::Absent => {
        info!(repo = %repo_name, url = %remote_url, "cloning repository");
        run_all(self.runner, &[CommandSpec::new("git", ["clone", remote_url])])?;
        Ok(SyncOutcome::Cloned)
      }
      RepoState::PresentAsPlainFolder => Err(SyncError::Conflict { path }),
      RepoState::PresentAsVersionedRepo => match self.decisions.decide(repo_name) {
        UserDecision::Abort => Err(SyncError::Aborted {
          repo: repo_name.to_string(),
        }),
        UserDecision::IgnoreAndContinue => {
          info!(repo = %repo_name, "keeping existing checkout as is");
          Ok(SyncOutcome::Ignored)
        }
        UserDecision::UpdateAndContinue => {
          info!(repo = %repo_name, "updating existing checkout");
          let _repo = WorkdirGuard::enter(&path).map_err(|source| SyncError::Workdir {
            path: path.clone(),
            source,
          })?;
          run_all(
            self.runner,
            &[CommandSpec::new("git", ["fetch"]), CommandSpec::new("git", ["pull"])],
          )?;
          Ok(SyncOutcome::Updated)
        }
      },
    }
  }
}
