//! Token check command
//!
//! Runs the reachability check on its own, without touching the output
//! directory.

use crate::config::Settings;
use crate::crypto::SecureString;
use crate::error::SealerResult;
use crate::remote::{DiskClient, Reachability};
use crate::setup::{Prompt, TerminalPrompt};

/// Handle the `check` command
///
/// Prompts for the token when none was given on the command line or in
/// the environment.
pub fn handle_check_command(settings: &Settings, token: Option<String>) -> SealerResult<()> {
    let token = match token {
        Some(token) => SecureString::trimmed(token),
        None => TerminalPrompt.secret("Cloud storage API token: ")?,
    };

    let client = DiskClient::new(settings)?;
    client.check(&token)?;

    println!(
        "Connection established: folder '{}' is reachable with this token.",
        settings.remote_folder
    );
    Ok(())
}
