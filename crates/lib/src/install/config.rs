use std::path::PathBuf;

use tracing::debug;

use crate::consts::{DEFAULT_REMOTE_BASE, OS_ENV, REMOTE_ENV};
use crate::install::InstallError;
use crate::platform::Os;
use crate::platform::paths::home_dir;

/// Everything an install reads from its environment, gathered once at start.
#[derive(Debug, Clone)]
pub struct InstallConfig {
  /// Directory the checkouts are created in.
  pub install_dir: PathBuf,
  /// The user's home, holding shell profiles and platform data.
  pub home_dir: PathBuf,
  /// Base URL the repositories are cloned from.
  pub remote_base: String,
  /// Host operating system; `None` when it is not one we know.
  pub os: Option<Os>,
}

impl InstallConfig {
  /// Build the configuration from the current process.
  ///
  /// - install dir: the current working directory
  /// - home: `HOME` (`USERPROFILE` on Windows)
  /// - remote base: `XTCINSTALL_REMOTE`, default `https://github.com/xtclang`
  /// - OS: `XTCINSTALL_OS` if set, otherwise detected
  ///
  /// # Errors
  ///
  /// Returns an error if the current directory or home cannot be determined.
  pub fn from_env() -> Result<Self, InstallError> {
    let cwd = std::env::current_dir().map_err(InstallError::CurrentDir)?;
    let install_dir = dunce::canonicalize(&cwd).unwrap_or(cwd);
    let home_dir = home_dir().ok_or(InstallError::MissingHome)?;

    let remote_base = std::env::var(REMOTE_ENV)
      .ok()
      .filter(|v| !v.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_REMOTE_BASE.to_string());

    let os = match std::env::var(OS_ENV) {
      Ok(name) => Os::from_name(&name),
      Err(_) => Os::current(),
    };

    let config = Self {
      install_dir,
      home_dir,
      remote_base,
      os,
    };
    debug!(?config, "loaded install configuration");
    Ok(config)
  }
}
