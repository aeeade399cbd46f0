//! Operator input
//!
//! The wizard only talks to the operator through [`Prompt`], so the whole
//! flow runs the same against a terminal or a scripted test double.

use std::io::{self, BufRead, Write};

use crate::crypto::SecureString;
use crate::error::{SealerError, SealerResult};

/// Source of operator answers
pub trait Prompt {
    /// Ask for a secret without echoing it; the answer is trimmed
    fn secret(&mut self, label: &str) -> SealerResult<SecureString>;

    /// Ask a yes/no question; an empty answer means yes
    fn confirm(&mut self, question: &str) -> SealerResult<bool>;
}

/// Prompts on the controlling terminal
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn secret(&mut self, label: &str) -> SealerResult<SecureString> {
        let answer = rpassword::prompt_password(label)
            .map_err(|e| SealerError::Io(format!("Failed to read input: {}", e)))?;
        Ok(SecureString::trimmed(answer))
    }

    fn confirm(&mut self, question: &str) -> SealerResult<bool> {
        print!("{} [Y/n]: ", question);
        io::stdout().flush()?;

        read_yes_no(io::stdin().lock())
    }
}

/// Read one yes/no answer; end of input is an error, never a default
fn read_yes_no<R: BufRead>(mut reader: R) -> SealerResult<bool> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(SealerError::Io("unexpected end of input".into()));
    }
    Ok(parse_yes_no(&input))
}

fn parse_yes_no(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "" | "y" | "yes")
}
