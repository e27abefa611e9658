//! Host platform facts: operating system, home paths and shell profiles.

pub mod os;
pub mod paths;
pub mod shell;

pub use os::Os;
pub use shell::Shell;
