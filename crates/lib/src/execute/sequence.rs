use tracing::debug;

use crate::execute::runner::CommandRunner;
use crate::execute::types::{CommandSpec, ExecError};

/// Run `commands` in order, stopping at the first failure.
///
/// Commands that already succeeded are not rolled back. An empty list is a
/// success: it is what a caller schedules when nothing needs doing.
pub fn run_all(runner: &dyn CommandRunner, commands: &[CommandSpec]) -> Result<(), ExecError> {
  for (index, command) in commands.iter().enumerate() {
    debug!(step = index + 1, total = commands.len(), cmd = %command, "running command");
    runner.run(command)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::util::testutil::RecordingRunner;

  #[test]
  fn empty_sequence_succeeds_without_running_anything() {
    let runner = RecordingRunner::new();
    assert!(run_all(&runner, &[]).is_ok());
    assert!(runner.commands().is_empty());
  }

  #[test]
  fn runs_every_command_in_order() {
    let runner = RecordingRunner::new();
    let commands = [CommandSpec::new("git", ["fetch"]), CommandSpec::new("git", ["pull"])];

    run_all(&runner, &commands).unwrap();

    assert_eq!(runner.commands(), vec!["git fetch", "git pull"]);
  }

  #[test]
  fn stops_at_first_failure() {
    let runner = RecordingRunner::new().failing_on("sudo npm install");
    let commands = [
      CommandSpec::new("sudo", ["npm", "install"]),
      CommandSpec::new("sudo", ["npm", "install", "-g", "@quasar/cli"]),
    ];

    let result = run_all(&runner, &commands);

    assert!(matches!(result, Err(ExecError::Failed { .. })));
    assert_eq!(runner.commands(), vec!["sudo npm install"]);
  }

  #[test]
  fn earlier_successes_are_kept_when_a_later_command_fails() {
    let runner = RecordingRunner::new().failing_on("git pull");
    let commands = [
      CommandSpec::new("git", ["fetch"]),
      CommandSpec::new("git", ["pull"]),
      CommandSpec::new("git", ["status"]),
    ];

    assert!(run_all(&runner, &commands).is_err());
    assert_eq!(runner.commands(), vec!["git fetch", "git pull"]);
  }
}
