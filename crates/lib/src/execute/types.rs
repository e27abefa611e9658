//! Types for command execution.
//!
//! This module defines the command description handed to a runner and the
//! errors a runner can report.

use std::fmt;

use thiserror::Error;

/// One external command: a program and its arguments.
///
/// Commands carry no working directory of their own; they run in the
/// process's current directory at the moment they are executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
  pub program: String,
  pub args: Vec<String>,
}

impl CommandSpec {
  pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      program: program.into(),
      args: args.into_iter().map(Into::into).collect(),
    }
  }

  /// A command without arguments, e.g. a setup script.
  pub fn program(program: impl Into<String>) -> Self {
    Self {
      program: program.into(),
      args: Vec::new(),
    }
  }
}

impl fmt::Display for CommandSpec {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program)?;
    for arg in &self.args {
      write!(f, " {}", arg)?;
    }
    Ok(())
  }
}

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum ExecError {
  /// The process could not be started (missing binary, permissions, ...).
  #[error("failed to launch {cmd}: {source}")]
  Spawn {
    cmd: String,
    #[source]
    source: std::io::Error,
  },

  /// The process ran but did not exit with code 0.
  #[error("command failed with exit code {}: {cmd}", code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
  Failed { cmd: String, code: Option<i32> },

  /// Reading the output pipe or waiting for the process failed.
  #[error("i/o error while running {cmd}: {source}")]
  Io {
    cmd: String,
    #[source]
    source: std::io::Error,
  },
}
