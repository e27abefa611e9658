use tracing::{info, warn};

use crate::consts::{XDK_HOME_VAR, XDK_INSTALL_SUBDIR};
use crate::dispatch::build_setup_command;
use crate::execute::CommandSpec;
use crate::install::{InstallError, Installer, Target, enter};
use crate::patch::apply_managed_block;
use crate::platform::{Os, Shell};

impl Installer<'_> {
  /// Build the XDK, export `XDK_HOME` into the user's shell profiles and run
  /// the XDK's own configuration script.
  pub(super) fn install_xvm(&self, os: Os) -> Result<(), InstallError> {
    self.sync(Target::Xvm)?;

    let checkout = self.config.install_dir.join(Target::Xvm.repo_name());
    {
      let _repo = enter(&checkout)?;
      self.runner.run(&CommandSpec::new("./gradlew", ["installDist"]))?;
    }

    let xdk_home = checkout.join(XDK_INSTALL_SUBDIR);
    let xdk_home_str = xdk_home.display().to_string();
    let mut amended = 0;
    for shell in Shell::PROFILES {
      let rc = shell.rc_path(&self.config.home_dir);
      if !rc.is_file() {
        continue;
      }
      let lines = [
        shell.export_var(XDK_HOME_VAR, &xdk_home_str),
        shell.prepend_path("PATH", &format!("${}/bin", XDK_HOME_VAR)),
      ];
      apply_managed_block(&rc, XDK_HOME_VAR, &lines, true)?;
      info!(%shell, path = %rc.display(), "exported {} in shell profile", XDK_HOME_VAR);
      amended += 1;
    }
    if amended == 0 {
      warn!(
        home = %self.config.home_dir.display(),
        "no shell profile found; set {}={} and add $XDK_HOME/bin to PATH yourself",
        XDK_HOME_VAR,
        xdk_home_str
      );
    }

    let _bin = enter(xdk_home.join("bin"))?;
    self.runner.run(&build_setup_command(os)?)?;
    Ok(())
  }
}
