use std::path::Path;

/// What currently occupies a checkout path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoState {
  /// Nothing there yet.
  Absent,
  /// A directory with a `.git` directory inside.
  PresentAsVersionedRepo,
  /// Something else: a plain directory, or a file, that we must not touch.
  PresentAsPlainFolder,
}

impl RepoState {
  /// Classify `path` by looking at the filesystem now.
  pub fn inspect(path: &Path) -> Self {
    if !path.exists() {
      RepoState::Absent
    } else if path.is_dir() && path.join(".git").is_dir() {
      RepoState::PresentAsVersionedRepo
    } else {
      RepoState::PresentAsPlainFolder
    }
  }
}
