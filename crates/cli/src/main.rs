mod cmd;
mod output;
mod prompts;

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use xtcinstall_lib::repo::UserDecision;

use crate::output::print_error;

/// xtcinstall - set up an XTC development environment
#[derive(Parser)]
#[command(name = "xtcinstall")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// What to install: xvm, platform or examples
  ///
  /// Install one target per run: the environment set up by `xvm` is only
  /// visible to shells started afterwards.
  target: Option<String>,

  /// Answer for an existing checkout instead of prompting
  #[arg(long, value_enum, value_name = "ACTION")]
  on_existing: Option<OnExisting>,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OnExisting {
  /// Fetch and pull, then continue
  Update,
  /// Keep the checkout as it is and continue
  Ignore,
  /// Stop the install
  Abort,
}

impl From<OnExisting> for UserDecision {
  fn from(value: OnExisting) -> Self {
    match value {
      OnExisting::Update => UserDecision::UpdateAndContinue,
      OnExisting::Ignore => UserDecision::IgnoreAndContinue,
      OnExisting::Abort => UserDecision::Abort,
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_filter = if cli.verbose {
    "debug"
  } else {
    "warn,xtcinstall_lib=info"
  };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match cmd::cmd_install(cli.target.as_deref(), cli.on_existing.map(UserDecision::from)) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      print_error(&format!("{:#}", err));
      ExitCode::FAILURE
    }
  }
}
