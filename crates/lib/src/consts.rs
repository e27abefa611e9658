pub const APP_NAME: &str = "xtcinstall";

/// Default location of the upstream repositories
pub const DEFAULT_REMOTE_BASE: &str = "https://github.com/xtclang";

/// Overrides [`DEFAULT_REMOTE_BASE`]
pub const REMOTE_ENV: &str = "XTCINSTALL_REMOTE";
/// Overrides host OS detection (`linux`, `macos`, `windows`)
pub const OS_ENV: &str = "XTCINSTALL_OS";

/// Variable exported into shell profiles; also marks the lines we manage there
pub const XDK_HOME_VAR: &str = "XDK_HOME";
/// Where `gradlew installDist` leaves the XDK, relative to the xvm checkout
pub const XDK_INSTALL_SUBDIR: &str = "xdk/build/install/xdk";

pub const PLATFORM_DATA_DIR: &str = "xqiz.it";
pub const PLATFORM_RULES_DIR: &str = "platform";
pub const PLATFORM_USERS_DIR: &str = "users";
pub const PLATFORM_GUI_SUBDIR: &str = "platformUI/gui";

pub const PACKAGE_MANIFEST: &str = "package.json";
pub const QUASAR_PACKAGE: &str = "quasar";
/// Newer quasar releases break the platform UI build
pub const QUASAR_VERSION: &str = "2.15.4";

pub const FIREWALL_RULE_FILE: &str = "port-forwarding.conf";
pub const FIREWALL_RULES: [&str; 2] = [
  "rdr pass on lo0 inet proto tcp from any to self port 80 -> 127.0.0.1 port 8080",
  "rdr pass on lo0 inet proto tcp from any to self port 443 -> 127.0.0.1 port 8090",
];

/// Example projects built by the `examples` target
pub const EXAMPLE_PROJECTS: &[&str] = &["banking"];
