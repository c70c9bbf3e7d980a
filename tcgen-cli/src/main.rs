//! tcgen CLI
//!
//! Command-line interface for generating TeamCity acceptance-test build
//! configurations from a provider manifest.

mod commands;
mod config;
mod output;
mod service_resolver;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tcgen")]
#[command(about = "TeamCity acceptance-test configuration generator", long_about = None)]
struct Cli {
    /// Provider manifest
    #[arg(long, global = true, env = "TCGEN_MANIFEST", default_value = "tcgen.toml")]
    manifest: PathBuf,

    /// Generate every nightly trigger as inactive
    ///
    /// The environment variable accepts 1/0, yes/no, on/off and true/false.
    #[arg(
        long,
        global = true,
        env = "TCGEN_DISABLE_TRIGGERS",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    disable_triggers: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    // Logs go to stderr so generated output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tcgen=info,tcgen_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        manifest_path: cli.manifest,
        disable_triggers: cli.disable_triggers,
    };

    handle_command(cli.command, &config)
}
