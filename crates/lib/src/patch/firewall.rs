use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::consts::{FIREWALL_RULE_FILE, FIREWALL_RULES};
use crate::patch::{PatchError, write_atomic};

/// The pf anchor file redirecting ports 80/443 to the platform's dev ports.
///
/// Unlike shell profiles the whole file is ours: enabling rewrites it with
/// the rules, disabling rewrites it empty (so a reload flushes the rules) and
/// then deletes it.
#[derive(Debug, Clone)]
pub struct FirewallRuleFile {
  path: PathBuf,
}

impl FirewallRuleFile {
  pub fn in_dir(dir: &Path) -> Self {
    Self {
      path: dir.join(FIREWALL_RULE_FILE),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// File content for the requested state: a blank line, then the rules if enabled.
  pub fn render(enable: bool) -> String {
    let mut content = String::from("\n");
    if enable {
      for rule in FIREWALL_RULES {
        content.push_str(rule);
        content.push('\n');
      }
    }
    content
  }

  pub fn write(&self, enable: bool) -> Result<(), PatchError> {
    write_atomic(&self.path, &Self::render(enable))
  }

  /// Delete the file; a file that is already gone is fine.
  pub fn remove(&self) -> Result<(), PatchError> {
    match fs::remove_file(&self.path) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(source) => Err(PatchError::Remove {
        path: self.path.clone(),
        source,
      }),
    }
  }
}
