//! Interactive run command

use crate::config::{paths::SealerPaths, settings::Settings};
use crate::error::SealerResult;
use crate::remote::DiskClient;
use crate::setup::{SetupWizard, TerminalPrompt, WizardOutcome};

/// Handle the `run` command (also the default with no subcommand)
pub fn handle_run_command(paths: &SealerPaths, settings: &Settings) -> SealerResult<WizardOutcome> {
    let client = DiskClient::new(settings)?;
    let wizard = SetupWizard::new(paths.clone(), settings.clone());
    wizard.run(client, &mut TerminalPrompt)
}
