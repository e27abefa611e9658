//! Test utilities for xtcinstall-lib.
//!
//! Fakes for the runner and decision seams, plus helpers for tests that need
//! real shell commands or git-looking directories.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use crate::consts::DEFAULT_REMOTE_BASE;
use crate::execute::{CommandRunner, CommandSpec, ExecError};
use crate::install::InstallConfig;
use crate::platform::Os;
use crate::repo::{DecisionProvider, UserDecision};

/// A command seen by [`RecordingRunner`] and the directory it ran in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
  pub command: String,
  pub cwd: PathBuf,
}

type Effect = Box<dyn Fn(&CommandSpec)>;

/// Runner that records commands instead of spawning them.
///
/// A command whose display form matches `failing_on` returns a non-zero exit.
/// The optional effect runs for every command, so tests can simulate what a
/// real `git clone` would leave on disk.
#[derive(Default)]
pub struct RecordingRunner {
  calls: RefCell<Vec<RecordedCall>>,
  failing_on: Option<String>,
  effect: Option<Effect>,
}

impl RecordingRunner {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn failing_on(mut self, command: &str) -> Self {
    self.failing_on = Some(command.to_string());
    self
  }

  pub fn with_effect(mut self, effect: impl Fn(&CommandSpec) + 'static) -> Self {
    self.effect = Some(Box::new(effect));
    self
  }

  pub fn calls(&self) -> Vec<RecordedCall> {
    self.calls.borrow().clone()
  }

  pub fn commands(&self) -> Vec<String> {
    self.calls.borrow().iter().map(|c| c.command.clone()).collect()
  }
}

impl CommandRunner for RecordingRunner {
  fn run(&self, command: &CommandSpec) -> Result<(), ExecError> {
    let cmd = command.to_string();
    self.calls.borrow_mut().push(RecordedCall {
      command: cmd.clone(),
      cwd: current_dir(),
    });

    if let Some(effect) = &self.effect {
      effect(command);
    }

    if self.failing_on.as_deref() == Some(cmd.as_str()) {
      return Err(ExecError::Failed { cmd, code: Some(1) });
    }
    Ok(())
  }
}

/// Decision provider answering from a fixed script, counting prompts.
pub struct ScriptedDecisions {
  answers: RefCell<VecDeque<UserDecision>>,
  prompts: Cell<usize>,
}

impl ScriptedDecisions {
  pub fn new(answers: impl IntoIterator<Item = UserDecision>) -> Self {
    Self {
      answers: RefCell::new(answers.into_iter().collect()),
      prompts: Cell::new(0),
    }
  }

  /// A provider for flows that must never prompt.
  pub fn none() -> Self {
    Self::new([])
  }

  pub fn prompts(&self) -> usize {
    self.prompts.get()
  }
}

impl DecisionProvider for ScriptedDecisions {
  fn decide(&self, repo_name: &str) -> UserDecision {
    self.prompts.set(self.prompts.get() + 1);
    self
      .answers
      .borrow_mut()
      .pop_front()
      .unwrap_or_else(|| panic!("unexpected prompt for '{}'", repo_name))
  }
}

/// Cloneable in-memory writer for capturing echoed output.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
  pub fn contents(&self) -> String {
    String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
  }
}

impl Write for SharedBuf {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

/// Canonical current directory, comparable with canonicalized temp paths.
pub fn current_dir() -> PathBuf {
  let dir = std::env::current_dir().unwrap();
  dunce::canonicalize(&dir).unwrap_or(dir)
}

/// Canonicalize a test path the same way [`current_dir`] does.
pub fn canonical(path: &Path) -> PathBuf {
  dunce::canonicalize(path).unwrap()
}

/// Create `path` as a directory that looks like a git checkout.
pub fn make_git_repo(path: &Path) {
  std::fs::create_dir_all(path.join(".git")).unwrap();
}

/// A temporary install directory and home directory for `os`.
///
/// Paths are canonical so they compare equal to [`current_dir`].
pub fn sandbox(os: Os) -> (TempDir, InstallConfig) {
  let temp = TempDir::new().unwrap();
  let root = canonical(temp.path());
  let install_dir = root.join("work");
  let home_dir = root.join("home");
  std::fs::create_dir_all(&install_dir).unwrap();
  std::fs::create_dir_all(&home_dir).unwrap();

  let config = InstallConfig {
    install_dir,
    home_dir,
    remote_base: DEFAULT_REMOTE_BASE.to_string(),
    os: Some(os),
  };
  (temp, config)
}

/// Returns a command running a shell script.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> CommandSpec {
  CommandSpec::new("/bin/sh", ["-c", script])
}

#[cfg(windows)]
pub fn shell_cmd(script: &str) -> CommandSpec {
  CommandSpec::new("cmd.exe", ["/C", script])
}
