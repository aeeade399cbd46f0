//! Interactive sealing session
//!
//! The session state machine gates sealing behind a successful
//! reachability check; the wizard walks an operator through it.

pub mod prompt;
pub mod session;
pub mod wizard;

#[cfg(test)]
mod test_support;

pub use prompt::{Prompt, TerminalPrompt};
pub use session::{Session, SessionState};
pub use wizard::{SetupWizard, WizardOutcome};
