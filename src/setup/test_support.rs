//! Test doubles for the session and wizard

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::crypto::SecureString;
use crate::error::{SealerError, SealerResult};
use crate::remote::Reachability;

use super::Prompt;

/// Reachability probe answering from a queue; an empty queue accepts
pub struct FakeProbe {
    results: RefCell<VecDeque<SealerResult<()>>>,
    tokens: RefCell<Vec<String>>,
}

impl FakeProbe {
    pub fn accepting() -> Self {
        Self::with_results(Vec::new())
    }

    pub fn with_results(results: Vec<SealerResult<()>>) -> Self {
        Self {
            results: RefCell::new(results.into()),
            tokens: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.tokens.borrow().len()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.borrow().clone()
    }
}

impl Reachability for FakeProbe {
    fn check(&self, token: &str) -> SealerResult<()> {
        self.tokens.borrow_mut().push(token.to_string());
        self.results.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

/// Prompt replaying canned answers; running out is an error
#[derive(Default)]
pub struct ScriptedPrompt {
    secrets: VecDeque<&'static str>,
    confirms: VecDeque<bool>,
}

impl ScriptedPrompt {
    pub fn new(secrets: &[&'static str], confirms: &[bool]) -> Self {
        Self {
            secrets: secrets.iter().copied().collect(),
            confirms: confirms.iter().copied().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.secrets.is_empty() && self.confirms.is_empty()
    }
}

impl Prompt for ScriptedPrompt {
    fn secret(&mut self, label: &str) -> SealerResult<SecureString> {
        self.secrets
            .pop_front()
            .map(|answer| SecureString::trimmed(answer))
            .ok_or_else(|| SealerError::Io(format!("no scripted answer for '{}'", label)))
    }

    fn confirm(&mut self, question: &str) -> SealerResult<bool> {
        self.confirms
            .pop_front()
            .ok_or_else(|| SealerError::Io(format!("no scripted answer for '{}'", question)))
    }
}
