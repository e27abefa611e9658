use std::fs;
use std::path::Path;

use tracing::info;

use crate::consts::{PACKAGE_MANIFEST, PLATFORM_GUI_SUBDIR, QUASAR_PACKAGE, QUASAR_VERSION};
use crate::dispatch::toggle_firewall;
use crate::execute::{CommandSpec, run_all};
use crate::install::{InstallError, Installer, Target, enter};
use crate::patch::pin_dependency;
use crate::platform::Os;
use crate::platform::paths::{platform_data_dir, platform_rules_dir, platform_users_dir};

impl Installer<'_> {
  pub(super) fn install_platform(&self, os: Os) -> Result<(), InstallError> {
    self.sync(Target::Platform)?;

    let home = &self.config.home_dir;
    for dir in [platform_data_dir(home), platform_rules_dir(home), platform_users_dir(home)] {
      fs::create_dir_all(&dir).map_err(|source| InstallError::CreateDir { path: dir.clone(), source })?;
    }

    toggle_firewall(self.runner, os, true, &platform_rules_dir(home))?;

    let checkout = self.config.install_dir.join(Target::Platform.repo_name());
    {
      let _gui = enter(checkout.join(PLATFORM_GUI_SUBDIR))?;
      let previous = pin_dependency(Path::new(PACKAGE_MANIFEST), QUASAR_PACKAGE, QUASAR_VERSION)?;
      info!(previous = previous.as_deref(), "pinned {} to {}", QUASAR_PACKAGE, QUASAR_VERSION);

      run_all(
        self.runner,
        &[
          CommandSpec::new("sudo", ["npm", "install"]),
          CommandSpec::new("sudo", ["npm", "install", "-g", "@quasar/cli"]),
        ],
      )?;
    }

    let _repo = enter(&checkout)?;
    self.runner.run(&CommandSpec::new("./gradlew", ["build"]))?;
    Ok(())
  }
}
