use std::io;

use xtcinstall_lib::repo::{DecisionProvider, UserDecision, prompt_decision};

use crate::output::print_warning;

/// Asks on the terminal what to do with an existing checkout.
pub struct ConsolePrompt;

impl DecisionProvider for ConsolePrompt {
  fn decide(&self, repo_name: &str) -> UserDecision {
    let mut input = io::stdin().lock();
    let mut output = io::stderr();

    match prompt_decision(&mut input, &mut output, repo_name) {
      Ok(decision) => decision,
      Err(e) => {
        print_warning(&format!("Cannot read an answer ({}), aborting", e));
        UserDecision::Abort
      }
    }
  }
}
