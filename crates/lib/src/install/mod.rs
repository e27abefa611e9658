//! Per-target install flows.
//!
//! Each flow synchronizes its repository, then runs the target's build and
//! setup steps in order. The first failing step ends the install; nothing
//! that already happened is undone.

mod config;
mod examples;
mod platform;
mod types;
mod xvm;

use std::path::Path;

use tracing::info;

use crate::execute::CommandRunner;
use crate::platform::Os;
use crate::repo::{DecisionProvider, RepoSync, SyncOutcome, remote_url};
use crate::workdir::WorkdirGuard;

pub use config::InstallConfig;
pub use types::{InstallError, Target};

/// Installs targets using an injected runner and decision provider.
pub struct Installer<'a> {
  runner: &'a dyn CommandRunner,
  decisions: &'a dyn DecisionProvider,
  config: &'a InstallConfig,
}

impl<'a> Installer<'a> {
  pub fn new(runner: &'a dyn CommandRunner, decisions: &'a dyn DecisionProvider, config: &'a InstallConfig) -> Self {
    Self {
      runner,
      decisions,
      config,
    }
  }

  /// Install `target` into the configured install directory.
  ///
  /// The working directory is reset to what it was before the call, whether
  /// the install succeeds or not.
  ///
  /// # Errors
  ///
  /// Returns an error if the host OS is unsupported or any step fails.
  pub fn install(&self, target: Target) -> Result<(), InstallError> {
    let os = self.host_os()?;
    info!(%target, %os, dir = %self.config.install_dir.display(), "installing");

    let _start = enter(&self.config.install_dir)?;

    match target {
      Target::Xvm => self.install_xvm(os),
      Target::Platform => self.install_platform(os),
      Target::Examples => self.install_examples(),
    }
  }

  fn host_os(&self) -> Result<Os, InstallError> {
    match self.config.os {
      Some(os) if os.is_supported_host() => Ok(os),
      Some(os) => Err(InstallError::UnsupportedOs { os: os.to_string() }),
      None => Err(InstallError::UnsupportedOs {
        os: "unknown".to_string(),
      }),
    }
  }

  fn sync(&self, target: Target) -> Result<SyncOutcome, InstallError> {
    let repo = target.repo_name();
    let url = remote_url(&self.config.remote_base, repo);
    let outcome = RepoSync::new(self.runner, self.decisions).synchronize(repo, &url)?;
    info!(repo, ?outcome, "repository ready");
    Ok(outcome)
  }
}

fn enter(path: impl AsRef<Path>) -> Result<WorkdirGuard, InstallError> {
  let path = path.as_ref();
  WorkdirGuard::enter(path).map_err(|source| InstallError::EnterDir {
    path: path.to_path_buf(),
    source,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::util::testutil::{RecordingRunner, ScriptedDecisions, current_dir, sandbox};
  use serial_test::serial;

  #[test]
  #[serial]
  fn windows_host_fails_before_any_side_effect() {
    let (_temp, config) = sandbox(Os::Windows);
    let runner = RecordingRunner::new();
    let decisions = ScriptedDecisions::none();
    let before = current_dir();

    let result = Installer::new(&runner, &decisions, &config).install(Target::Xvm);

    assert!(matches!(result, Err(InstallError::UnsupportedOs { ref os }) if os == "windows"));
    assert!(runner.commands().is_empty());
    assert_eq!(std::fs::read_dir(&config.install_dir).unwrap().count(), 0);
    assert_eq!(std::fs::read_dir(&config.home_dir).unwrap().count(), 0);
    assert_eq!(current_dir(), before);
  }

  #[test]
  #[serial]
  fn unknown_host_fails_before_any_side_effect() {
    let (_temp, mut config) = sandbox(Os::Linux);
    config.os = None;
    let runner = RecordingRunner::new();
    let decisions = ScriptedDecisions::none();

    let result = Installer::new(&runner, &decisions, &config).install(Target::Examples);

    assert!(matches!(result, Err(InstallError::UnsupportedOs { ref os }) if os == "unknown"));
    assert!(runner.commands().is_empty());
  }

  #[test]
  #[serial]
  fn missing_install_dir_is_reported() {
    let (_temp, mut config) = sandbox(Os::Linux);
    config.install_dir = config.install_dir.join("missing");
    let runner = RecordingRunner::new();
    let decisions = ScriptedDecisions::none();
    let before = current_dir();

    let result = Installer::new(&runner, &decisions, &config).install(Target::Examples);

    assert!(matches!(result, Err(InstallError::EnterDir { .. })));
    assert_eq!(current_dir(), before);
  }
}
