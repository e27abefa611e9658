//! External command execution.
//!
//! Commands run one at a time, blocking until the child exits, with the
//! child's output echoed live. There is no timeout: a hung child hangs the
//! caller.

pub mod runner;
pub mod sequence;
pub mod types;

pub use runner::{CommandRunner, ProcessRunner};
pub use sequence::run_all;
pub use types::{CommandSpec, ExecError};
