//! Setup wizard orchestration
//!
//! Guards the output directory, then walks the operator through checking
//! the token, choosing a passphrase and writing the update data.

use crate::config::{paths::SealerPaths, settings::Settings};
use crate::crypto::SecureString;
use crate::error::SealerResult;
use crate::remote::Reachability;
use crate::services::SealedArtifacts;
use crate::storage::{inspect_output_dir, DirectoryState};

use super::prompt::Prompt;
use super::session::Session;

/// How a wizard run ended
#[derive(Debug, PartialEq, Eq)]
pub enum WizardOutcome {
    /// All three artifacts were written
    Sealed(SealedArtifacts),
    /// The output directory was already populated; nothing was done
    AlreadySealed,
    /// The operator gave up before sealing
    Cancelled,
}

/// The interactive sealing wizard
pub struct SetupWizard {
    paths: SealerPaths,
    settings: Settings,
}

impl SetupWizard {
    /// Create a new setup wizard
    pub fn new(paths: SealerPaths, settings: Settings) -> Self {
        Self { paths, settings }
    }

    /// Run the interactive wizard
    ///
    /// A guard failure ends the run with an error. Check failures and
    /// storage failures are reported and may be retried.
    pub fn run<R, P>(&self, probe: R, prompt: &mut P) -> SealerResult<WizardOutcome>
    where
        R: Reachability,
        P: Prompt,
    {
        let output_dir = self.paths.update_data_dir();

        match inspect_output_dir(&output_dir)? {
            DirectoryState::AlreadySealed => {
                eprintln!(
                    "Warning: {} already contains all update data. Nothing to do.",
                    output_dir.display()
                );
                return Ok(WizardOutcome::AlreadySealed);
            }
            DirectoryState::Created => {
                println!("Created output directory {}", output_dir.display());
            }
            DirectoryState::Ready { entries } if entries > 0 => {
                println!(
                    "Note: {} holds {} file(s); existing artifacts will be replaced.",
                    output_dir.display(),
                    entries
                );
            }
            DirectoryState::Ready { .. } => {}
        }

        println!();
        println!("===========================================");
        println!("  Update Data Setup");
        println!("===========================================");
        println!();

        let mut session = Session::new(probe, output_dir, self.settings.version_marker.clone());

        // Step 1: token, checked against the remote folder
        println!("Step 1: API token");
        loop {
            session.set_token(prompt.secret("Cloud storage API token: ")?);
            match session.check_token() {
                Ok(()) => {
                    println!("Connection established. The token can reach the game folder.");
                    break;
                }
                Err(e) => {
                    eprintln!("{}", e);
                    if !prompt.confirm("Try again?")? {
                        println!("Setup cancelled.");
                        return Ok(WizardOutcome::Cancelled);
                    }
                }
            }
        }

        // Step 2: passphrase
        println!();
        println!("Step 2: Encryption passphrase");
        let passphrase = prompt_passphrase(prompt)?;

        // Step 3: write the artifacts
        println!();
        loop {
            match session.create_data(&passphrase) {
                Ok(artifacts) => {
                    println!("Update data created:");
                    for path in artifacts.paths() {
                        println!("  {}", path.display());
                    }
                    return Ok(WizardOutcome::Sealed(artifacts));
                }
                Err(e) if e.is_storage() => {
                    eprintln!("{}", e);
                    if !prompt.confirm("Retry writing the update data?")? {
                        return Err(e);
                    }
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Prompt for a non-empty passphrase with confirmation
fn prompt_passphrase<P: Prompt>(prompt: &mut P) -> SealerResult<SecureString> {
    loop {
        let first = prompt.secret("Passphrase: ")?;

        if first.is_blank() {
            eprintln!("A passphrase is required. Please try again.");
            continue;
        }

        let second = prompt.secret("Confirm passphrase: ")?;

        if first != second {
            eprintln!("Passphrases do not match. Please try again.");
            continue;
        }

        return Ok(first);
    }
}
