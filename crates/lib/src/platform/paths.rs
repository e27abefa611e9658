use std::path::{Path, PathBuf};

use crate::consts::{PLATFORM_DATA_DIR, PLATFORM_RULES_DIR, PLATFORM_USERS_DIR};

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var_os("USERPROFILE").filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> Option<PathBuf> {
  std::env::var_os("HOME").filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Root of the platform's per-user data (`~/xqiz.it`)
pub fn platform_data_dir(home: &Path) -> PathBuf {
  home.join(PLATFORM_DATA_DIR)
}

/// Directory holding the platform's firewall rule file (`~/xqiz.it/platform`)
pub fn platform_rules_dir(home: &Path) -> PathBuf {
  platform_data_dir(home).join(PLATFORM_RULES_DIR)
}

/// Directory holding the platform's user accounts (`~/xqiz.it/users`)
pub fn platform_users_dir(home: &Path) -> PathBuf {
  platform_data_dir(home).join(PLATFORM_USERS_DIR)
}
