use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use update_sealer::cli::{handle_check_command, handle_run_command};
use update_sealer::config::{paths::SealerPaths, settings::Settings};
use update_sealer::setup::WizardOutcome;

#[derive(Parser)]
#[command(
    name = "update-sealer",
    version,
    about = "Seal a cloud storage API token into the game's update data",
    long_about = "update-sealer checks a cloud storage API token against the game's \
                  remote folder, then encrypts it under a key derived from your \
                  passphrase and writes the update data (token, key index and \
                  version) into game/update_data."
)]
struct Cli {
    /// Base directory containing the game package [default: executable's directory]
    #[arg(long, global = true, env = "UPDATE_SEALER_DIR", value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Cloud storage API host to check the token against
    #[arg(long, global = true, env = "UPDATE_SEALER_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a token, then create the update data (default)
    Run,

    /// Only check that a token can reach the game folder
    Check {
        /// API token; prompted for when omitted
        #[arg(long, env = "UPDATE_SEALER_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Show resolved paths and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => SealerPaths::with_base_dir(dir),
        None => SealerPaths::new()?,
    };
    let mut settings = Settings::load_or_default(&paths)?;
    if let Some(url) = cli.api_url {
        settings = settings.with_api_base_url(url);
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => match handle_run_command(&paths, &settings)? {
            WizardOutcome::Sealed(_) => println!("Token and key were created successfully."),
            WizardOutcome::AlreadySealed | WizardOutcome::Cancelled => {}
        },
        Commands::Check { token } => {
            handle_check_command(&settings, token)?;
        }
        Commands::Config => {
            println!("update-sealer Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Output directory: {}", paths.update_data_dir().display());
            println!("Token file:       {}", paths.token_file().display());
            println!("Key file:         {}", paths.key_file().display());
            println!("Version file:     {}", paths.version_file().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  API URL:        {}", settings.api_base_url);
            println!("  Remote folder:  {}", settings.remote_folder);
            println!("  Version marker: {}", settings.version_marker);
            match settings.request_timeout_secs {
                Some(secs) => println!("  Request timeout: {}s", secs),
                None => println!("  Request timeout: client default"),
            }
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "update_sealer=debug,warn",
        _ => "update_sealer=trace,info",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
