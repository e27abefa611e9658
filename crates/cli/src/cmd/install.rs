//! Implementation of `xtcinstall <TARGET>`.
//!
//! Resolves the target and the environment, then hands off to the library's
//! [`Installer`] with a real process runner.

use anyhow::{Context, Result, bail};

use xtcinstall_lib::consts::APP_NAME;
use xtcinstall_lib::execute::ProcessRunner;
use xtcinstall_lib::install::{InstallConfig, Installer, Target};
use xtcinstall_lib::repo::{DecisionProvider, FixedDecision, UserDecision};

use crate::output::{print_info, print_success};
use crate::prompts::ConsolePrompt;

/// Execute the install command.
///
/// `on_existing` answers for an already present checkout; without it the user
/// is asked on the console.
///
/// # Errors
///
/// Returns an error if the target is missing or unknown, the environment is
/// unusable, or any install step fails.
pub fn cmd_install(target: Option<&str>, on_existing: Option<UserDecision>) -> Result<()> {
  let Some(name) = target else {
    print_usage();
    bail!("missing target argument");
  };

  let target = match name.parse::<Target>() {
    Ok(target) => target,
    Err(err) => {
      print_usage();
      return Err(err.into());
    }
  };

  let config = InstallConfig::from_env().context("Failed to read install configuration")?;
  let runner = ProcessRunner::new();
  let decisions: Box<dyn DecisionProvider> = match on_existing {
    Some(decision) => Box::new(FixedDecision(decision)),
    None => Box::new(ConsolePrompt),
  };

  Installer::new(&runner, decisions.as_ref(), &config)
    .install(target)
    .with_context(|| format!("Installing the repo {} failed", target))?;

  print_success(&format!("Installing the repo {} succeeded", target));
  if let Some(note) = target.post_install_note() {
    println!();
    print_info(note);
  }

  Ok(())
}

fn print_usage() {
  eprintln!("Usage: {} <TARGET>", APP_NAME);
  eprintln!("  TARGET: {}", Target::choices());
}
