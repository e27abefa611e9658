//! Targets and errors for the install flows.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::dispatch::DispatchError;
use crate::execute::ExecError;
use crate::patch::PatchError;
use crate::repo::SyncError;

/// One installable part of the stack. Only one is installed per run: the
/// environment exported by `xvm` is not visible to the process that
/// installed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
  /// The XVM runtime and XDK toolchain.
  Xvm,
  /// The platform host and its web UI.
  Platform,
  /// The example applications.
  Examples,
}

impl Target {
  pub const ALL: [Target; 3] = [Target::Xvm, Target::Platform, Target::Examples];

  pub fn as_str(&self) -> &'static str {
    match self {
      Target::Xvm => "xvm",
      Target::Platform => "platform",
      Target::Examples => "examples",
    }
  }

  /// Name of the upstream repository and of its local checkout.
  pub fn repo_name(&self) -> &'static str {
    self.as_str()
  }

  /// Something the user has to do after a successful install.
  pub fn post_install_note(&self) -> Option<&'static str> {
    match self {
      Target::Xvm => Some(
        "To install another target the new environment variables are needed. \
         Open a new terminal or source your shell rc file first.",
      ),
      Target::Platform | Target::Examples => None,
    }
  }

  /// `xvm|platform|examples`, for usage text.
  pub fn choices() -> String {
    Target::ALL.iter().map(Target::as_str).collect::<Vec<_>>().join("|")
  }
}

impl fmt::Display for Target {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for Target {
  type Err = InstallError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Target::ALL
      .into_iter()
      .find(|t| t.as_str() == s)
      .ok_or_else(|| InstallError::InvalidTarget { name: s.to_string() })
  }
}

/// Errors that can occur while installing a target.
#[derive(Debug, Error)]
pub enum InstallError {
  #[error("invalid target '{name}', expected one of {}", Target::choices())]
  InvalidTarget { name: String },

  #[error("unsupported operating system '{os}'")]
  UnsupportedOs { os: String },

  #[error("cannot determine home directory: HOME is not set")]
  MissingHome,

  #[error("cannot determine current directory: {0}")]
  CurrentDir(#[source] std::io::Error),

  #[error("failed to enter directory {}: {source}", path.display())]
  EnterDir { path: PathBuf, source: std::io::Error },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: std::io::Error },

  #[error(transparent)]
  Sync(#[from] SyncError),

  #[error(transparent)]
  Exec(#[from] ExecError),

  #[error(transparent)]
  Patch(#[from] PatchError),

  #[error(transparent)]
  Dispatch(#[from] DispatchError),
}
