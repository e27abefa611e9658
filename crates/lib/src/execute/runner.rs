//! Running a single external command.
//!
//! The child's stdout and stderr share one OS pipe, so the lines we echo come
//! out in exactly the order the child wrote them.

use std::io::{self, BufRead, BufReader, PipeReader, Write};
use std::process::{Command, Stdio};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::execute::types::{CommandSpec, ExecError};

/// Runs one command to completion.
///
/// `Ok(())` means the process exited with code 0. Implementations never panic
/// on process failures; every failure comes back as an [`ExecError`].
pub trait CommandRunner {
  fn run(&self, command: &CommandSpec) -> Result<(), ExecError>;
}

/// Runs commands as child processes, echoing their merged output line by line.
pub struct ProcessRunner {
  sink: Mutex<Box<dyn Write + Send>>,
}

impl ProcessRunner {
  /// A runner echoing to the process's stdout.
  pub fn new() -> Self {
    Self::with_sink(io::stdout())
  }

  /// A runner echoing to `sink` instead of stdout.
  pub fn with_sink(sink: impl Write + Send + 'static) -> Self {
    Self {
      sink: Mutex::new(Box::new(sink)),
    }
  }

  fn echo(&self, reader: PipeReader) -> io::Result<()> {
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    loop {
      line.clear();
      if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(());
      }
      let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
      sink.write_all(&line)?;
      sink.flush()?;
    }
  }
}

impl Default for ProcessRunner {
  fn default() -> Self {
    Self::new()
  }
}

impl CommandRunner for ProcessRunner {
  fn run(&self, command: &CommandSpec) -> Result<(), ExecError> {
    let cmd = command.to_string();
    info!(cmd = %cmd, "executing command");

    let io_err = |source| ExecError::Io {
      cmd: cmd.clone(),
      source,
    };

    let (reader, writer) = io::pipe().map_err(io_err)?;
    let stderr_writer = writer.try_clone().map_err(io_err)?;

    let mut process = Command::new(&command.program);
    process
      .args(&command.args)
      .stdin(Stdio::inherit())
      .stdout(writer)
      .stderr(stderr_writer);

    debug!(program = %command.program, "spawning process");

    let mut child = process.spawn().map_err(|source| ExecError::Spawn {
      cmd: cmd.clone(),
      source,
    })?;

    // `process` still owns the parent's copies of the write end; the reader
    // only sees EOF once those are closed too.
    drop(process);

    let echoed = self.echo(reader);
    let status = child.wait().map_err(io_err)?;
    echoed.map_err(io_err)?;

    if status.success() {
      info!(cmd = %cmd, "command succeeded");
      Ok(())
    } else {
      warn!(cmd = %cmd, code = ?status.code(), "command failed");
      Err(ExecError::Failed {
        cmd,
        code: status.code(),
      })
    }
  }
}
