mod install;

pub use install::cmd_install;
