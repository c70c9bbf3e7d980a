//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod generate;
mod init;
mod service;

pub use service::ServiceCommands;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Config;
use crate::output::OutputFormat;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate build configurations for every service in the manifest
    Generate {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Kotlin)]
        format: OutputFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Inspect individual services
    Service {
        #[command(subcommand)]
        command: ServiceCommands,
    },
    /// Write a starter manifest
    Init {
        /// Where to write the manifest (defaults to --manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Generate { format, output } => {
            generate::generate(config, format, output.as_deref())
        }
        Commands::Service { command } => service::handle_service_command(command, config),
        Commands::Init { output, force } => {
            let path = output.unwrap_or_else(|| config.manifest_path.clone());
            init::write_starter_manifest(&path, force)
        }
    }
}
