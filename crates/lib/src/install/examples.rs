use tracing::info;

use crate::consts::EXAMPLE_PROJECTS;
use crate::execute::CommandSpec;
use crate::install::{InstallError, Installer, Target, enter};

impl Installer<'_> {
  /// Sync the examples repository and build every listed example with gradle.
  pub(super) fn install_examples(&self) -> Result<(), InstallError> {
    self.sync(Target::Examples)?;

    let _repo = enter(Target::Examples.repo_name())?;
    for project in EXAMPLE_PROJECTS {
      let _project = enter(project)?;
      info!(project, "building example");
      self.runner.run(&CommandSpec::new("gradle", ["build"]))?;
    }

    Ok(())
  }
}
