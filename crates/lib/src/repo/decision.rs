//! What to do with a checkout that already exists.

use std::io::{self, BufRead, Write};

/// The user's answer for an existing checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDecision {
  /// Fetch and pull, then continue installing.
  UpdateAndContinue,
  /// Leave the checkout as it is and continue installing.
  IgnoreAndContinue,
  /// Stop the whole install.
  Abort,
}

impl UserDecision {
  /// Parse a single-letter answer (`U`, `I` or `A`, any case).
  pub fn parse(input: &str) -> Option<Self> {
    match input.trim().to_ascii_uppercase().as_str() {
      "U" => Some(Self::UpdateAndContinue),
      "I" => Some(Self::IgnoreAndContinue),
      "A" => Some(Self::Abort),
      _ => None,
    }
  }
}

/// Source of decisions for checkouts that already exist.
pub trait DecisionProvider {
  fn decide(&self, repo_name: &str) -> UserDecision;
}

/// Answers every question the same way, without prompting.
#[derive(Debug, Clone, Copy)]
pub struct FixedDecision(pub UserDecision);

impl DecisionProvider for FixedDecision {
  fn decide(&self, _repo_name: &str) -> UserDecision {
    self.0
  }
}

/// Ask on `output` and read answers from `input` until one is valid.
///
/// Running out of input counts as [`UserDecision::Abort`]: nobody is left to
/// answer.
///
/// # Errors
///
/// Returns an error if reading or writing the prompt fails.
pub fn prompt_decision<R, W>(input: &mut R, output: &mut W, repo_name: &str) -> io::Result<UserDecision>
where
  R: BufRead,
  W: Write,
{
  writeln!(output, "'{}' is already a repo. What do you want to do?", repo_name)?;

  loop {
    write!(
      output,
      "(U)pdate from remote and continue, (I)gnore remote and continue, (A)bort the whole process: U/I/A? "
    )?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
      writeln!(output)?;
      return Ok(UserDecision::Abort);
    }

    match UserDecision::parse(&line) {
      Some(decision) => return Ok(decision),
      None => writeln!(output, "Invalid choice. Please enter U, I, or A.")?,
    }
  }
}
