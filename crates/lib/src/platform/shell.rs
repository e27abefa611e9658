//! Shell profiles the installer amends and the lines it writes into them

use std::path::{Path, PathBuf};

/// Shells whose rc files receive the exported environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
  Zsh,
  Bash,
}

impl Shell {
  /// Every shell profile the installer amends, in the order they are visited.
  ///
  /// There is no reliable way to tell which shell the user actually runs, so
  /// each profile that exists gets the same treatment.
  pub const PROFILES: [Shell; 2] = [Shell::Zsh, Shell::Bash];

  /// Get the shell name as a string
  pub fn as_str(&self) -> &'static str {
    match self {
      Shell::Zsh => "zsh",
      Shell::Bash => "bash",
    }
  }

  /// File name of the interactive rc file in the user's home directory
  pub fn rc_file_name(&self) -> &'static str {
    match self {
      Shell::Zsh => ".zshrc",
      Shell::Bash => ".bashrc",
    }
  }

  /// Full path of the rc file under `home`
  pub fn rc_path(&self, home: &Path) -> PathBuf {
    home.join(self.rc_file_name())
  }

  /// Generate an export statement for setting an environment variable
  ///
  /// The value is single-quoted, so the shell stores it byte for byte.
  pub fn export_var(&self, name: &str, value: &str) -> String {
    match self {
      Shell::Zsh | Shell::Bash => format!("export {}={}", name, single_quote(value)),
    }
  }

  /// Generate a prepend statement for a PATH-like variable
  ///
  /// `value` goes inside double quotes so references like `$XDK_HOME` in it
  /// still expand when the profile is sourced.
  pub fn prepend_path(&self, name: &str, value: &str) -> String {
    match self {
      Shell::Zsh | Shell::Bash => format!("export {}=\"{}\":${}", name, value, name),
    }
  }
}

/// POSIX single quoting; an embedded `'` becomes `'\''`.
fn single_quote(value: &str) -> String {
  format!("'{}'", value.replace('\'', r"'\''"))
}

impl std::fmt::Display for Shell {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
