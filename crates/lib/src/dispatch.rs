//! OS-specific steps of the install.
//!
//! Each operation is one `match` over [`Os`], so a new OS variant does not
//! compile until every operation has decided what to do with it.

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::execute::{CommandRunner, CommandSpec};
use crate::patch::{FirewallRuleFile, PatchError};
use crate::platform::Os;

/// Errors from OS-dispatched operations.
#[derive(Debug, Error)]
pub enum DispatchError {
  #[error("{operation} is not supported on {os}")]
  Unsupported { operation: &'static str, os: Os },

  #[error(transparent)]
  Patch(#[from] PatchError),
}

/// The XDK configuration script to run from the XDK's `bin` directory.
///
/// # Errors
///
/// Returns [`DispatchError::Unsupported`] for an OS without a setup script.
pub fn build_setup_command(os: Os) -> Result<CommandSpec, DispatchError> {
  let script = match os {
    Os::Linux => "./cfg_linux.sh",
    Os::MacOs => "./cfg_macos.sh",
    Os::Windows => "./cfg_windows.cmd",
  };
  Ok(CommandSpec::program(script))
}

/// Enable or disable forwarding of ports 80/443 to the platform's dev ports.
///
/// On macOS the rule file in `rule_dir` is rewritten and pf reloaded with
/// `sudo pfctl -f`. That reload regularly fails when the loaded rules already
/// match, so its failure is logged and otherwise ignored. Linux is not
/// implemented yet and succeeds without doing anything.
///
/// # Errors
///
/// Returns an error if the rule file cannot be written or removed, or the OS
/// has no firewall support at all.
pub fn toggle_firewall(runner: &dyn CommandRunner, os: Os, enable: bool, rule_dir: &Path) -> Result<(), DispatchError> {
  match os {
    Os::MacOs => {
      let rules = FirewallRuleFile::in_dir(rule_dir);
      rules.write(enable)?;
      info!(path = %rules.path().display(), enable, "wrote port forwarding rules");

      info!("reloading pf rules, this needs root access; sudo may ask for your password");
      let rule_file = rules.path().display().to_string();
      let reload = CommandSpec::new("sudo", ["pfctl", "-f", rule_file.as_str()]);
      if let Err(err) = runner.run(&reload) {
        warn!(
          error = %err,
          "pfctl reload failed; this is expected when the rules already exist or were already removed"
        );
      }

      if !enable {
        rules.remove()?;
      }
      Ok(())
    }
    // TODO: redirect 80/443 with nftables (`nft add rule nat prerouting tcp dport 80 redirect to :8080`)
    Os::Linux => {
      info!(enable, "port forwarding is not configured on linux yet, skipping");
      Ok(())
    }
    Os::Windows => Err(DispatchError::Unsupported {
      operation: "firewall port forwarding",
      os,
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::util::testutil::RecordingRunner;
  use tempfile::TempDir;
  use tracing_test::traced_test;

  fn pfctl_command(rules: &FirewallRuleFile) -> String {
    format!("sudo pfctl -f {}", rules.path().display())
  }

  #[test]
  fn every_os_has_a_setup_script() {
    assert_eq!(build_setup_command(Os::Linux).unwrap().program, "./cfg_linux.sh");
    assert_eq!(build_setup_command(Os::MacOs).unwrap().program, "./cfg_macos.sh");
    assert_eq!(build_setup_command(Os::Windows).unwrap().program, "./cfg_windows.cmd");
    assert!(build_setup_command(Os::Linux).unwrap().args.is_empty());
  }

  #[test]
  fn macos_enable_writes_rules_and_reloads() {
    let temp = TempDir::new().unwrap();
    let runner = RecordingRunner::new();
    let rules = FirewallRuleFile::in_dir(temp.path());

    toggle_firewall(&runner, Os::MacOs, true, temp.path()).unwrap();

    assert_eq!(runner.commands(), vec![pfctl_command(&rules)]);
    assert_eq!(std::fs::read_to_string(rules.path()).unwrap(), FirewallRuleFile::render(true));
  }

  #[test]
  #[traced_test]
  fn macos_reload_failure_is_only_an_advisory() {
    let temp = TempDir::new().unwrap();
    let rules = FirewallRuleFile::in_dir(temp.path());
    let runner = RecordingRunner::new().failing_on(&pfctl_command(&rules));

    let result = toggle_firewall(&runner, Os::MacOs, true, temp.path());

    assert!(result.is_ok());
    assert!(logs_contain("pfctl reload failed"));
    assert!(rules.path().exists());
  }

  #[test]
  fn macos_disable_reloads_empty_rules_then_deletes_file() {
    let temp = TempDir::new().unwrap();
    let rules = FirewallRuleFile::in_dir(temp.path());
    let path = rules.path().to_path_buf();
    let seen = std::rc::Rc::new(std::cell::RefCell::new(None));
    let seen_in_effect = seen.clone();
    let runner = RecordingRunner::new().with_effect(move |_| {
      *seen_in_effect.borrow_mut() = std::fs::read_to_string(&path).ok();
    });

    toggle_firewall(&runner, Os::MacOs, true, temp.path()).unwrap();
    toggle_firewall(&runner, Os::MacOs, false, temp.path()).unwrap();

    assert_eq!(runner.commands().len(), 2);
    assert_eq!(seen.borrow().as_deref(), Some("\n"));
    assert!(!rules.path().exists());
  }

  #[test]
  fn linux_is_a_successful_no_op() {
    let temp = TempDir::new().unwrap();
    let runner = RecordingRunner::new();

    toggle_firewall(&runner, Os::Linux, true, temp.path()).unwrap();
    toggle_firewall(&runner, Os::Linux, false, temp.path()).unwrap();

    assert!(runner.commands().is_empty());
    assert!(!FirewallRuleFile::in_dir(temp.path()).path().exists());
  }

  #[test]
  fn windows_is_unsupported() {
    let temp = TempDir::new().unwrap();
    let runner = RecordingRunner::new();

    let result = toggle_firewall(&runner, Os::Windows, true, temp.path());

    assert!(matches!(result, Err(DispatchError::Unsupported { os: Os::Windows, .. })));
    assert!(runner.commands().is_empty());
  }
}
