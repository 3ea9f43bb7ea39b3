//! ui::prompts
//!
//! Interactive project-name prompt.
//!
//! # Design
//!
//! The prompt loops until the input passes [`ProjectName`] validation; a
//! rejected answer prints the character-set rule and asks again, so a bad
//! name is never surfaced as a process failure. Empty input takes the
//! default suggestion.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use thiserror::Error;

use crate::core::types::{ProjectName, NAME_RULE};

/// Suggested name when the user just presses enter.
pub const DEFAULT_PROJECT_NAME: &str = "my-jtc-app";

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("stdin closed before a project name was entered")]
    Eof,

    #[error("failed to read from stdin: {0}")]
    Io(#[from] io::Error),
}

/// Prompt for a project name on stdin, re-asking until it validates.
pub fn project_name() -> Result<ProjectName, PromptError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();
    let mut line = String::new();

    loop {
        print!(
            "{} {} ",
            "?".green().bold(),
            format!("What is your project name? ({})", DEFAULT_PROJECT_NAME).bold()
        );
        io::stdout().flush()?;

        line.clear();
        if lines.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }

        let input = line.trim();
        let candidate = if input.is_empty() {
            DEFAULT_PROJECT_NAME
        } else {
            input
        };

        match ProjectName::new(candidate) {
            Ok(name) => return Ok(name),
            Err(_) => println!("{}", NAME_RULE.red()),
        }
    }
}
