//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the setup and remote layers.

pub mod check;
pub mod run;

pub use check::handle_check_command;
pub use run::handle_run_command;
