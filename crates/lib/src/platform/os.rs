use std::fmt;

/// Operating system variants known to the installer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Option<Self> {
    Self::from_name(std::env::consts::OS)
  }

  /// Parse an OS identifier as reported by `std::env::consts::OS` or `uname`.
  pub fn from_name(name: &str) -> Option<Self> {
    match name.trim().to_ascii_lowercase().as_str() {
      "linux" => Some(Self::Linux),
      "macos" | "darwin" => Some(Self::MacOs),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "macos",
      Self::Windows => "windows",
    }
  }

  /// Whether a full install can run on this OS.
  ///
  /// Windows is known to the dispatch tables but the installer itself only
  /// runs on Linux and macOS hosts.
  pub fn is_supported_host(&self) -> bool {
    match self {
      Self::Linux | Self::MacOs => true,
      Self::Windows => false,
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
