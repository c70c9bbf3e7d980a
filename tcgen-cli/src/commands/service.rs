//! Service command handlers
//!
//! Handles listing the services of the manifest and showing the build
//! configuration generated for one of them.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use tcgen_core::ServiceBuild;

use crate::config::Config;
use crate::output::{self, OutputFormat};
use crate::service_resolver::resolve_service;

/// Service subcommands
#[derive(Subcommand)]
pub enum ServiceCommands {
    /// List all services with their build IDs
    List,
    /// Show the build configuration of one service
    Show {
        /// Package name or unambiguous build ID prefix
        service: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Kotlin)]
        format: OutputFormat,
    },
}

/// Handle service commands
///
/// # Arguments
/// * `command` - The service command to execute
/// * `config` - The CLI configuration
pub fn handle_service_command(command: ServiceCommands, config: &Config) -> Result<()> {
    let project = config.load_project()?;

    match command {
        ServiceCommands::List => {
            println!(
                "{}",
                format!(
                    "Found {} service(s) for {}:",
                    project.builds.len(),
                    project.name
                )
                .bold()
            );
            println!();
            for build in &project.builds {
                print_service_summary(build);
            }
            Ok(())
        }
        ServiceCommands::Show { service, format } => {
            let build = resolve_service(&project, &service)?;
            let rendered = output::render_build_type(&build.build_type, format)?;
            output::emit(&rendered, None)
        }
    }
}

/// Print a service summary
fn print_service_summary(build: &ServiceBuild) {
    let build_type = &build.build_type;

    println!(
        "  {} {}  {}",
        "▸".cyan(),
        build.service.package_name().bold(),
        build.service.display_name().dimmed()
    );
    println!("    Build ID:   {}", build_type.id.cyan());
    println!("    Schedule:   {}", schedule_summary(build));
    if let Some(params) = build_type.parameter("PARALLELISM") {
        println!("    Parallel:   {}", params.value);
    }
    if let Some(timeout) = build_type.parameter("TIMEOUT") {
        println!("    Timeout:    {} min", timeout.value);
    }
    println!();
}

/// Describe the nightly trigger, colored by whether it is active
fn schedule_summary(build: &ServiceBuild) -> ColoredString {
    match build.build_type.nightly_trigger() {
        Some(trigger) if trigger.is_enabled() => format!(
            "nightly at {:02}:00 (days of week: {}, days of month: {})",
            trigger.start_hour, trigger.days_of_week, trigger.days_of_month
        )
        .green(),
        Some(_) => "disabled".yellow(),
        None => "none".dimmed(),
    }
}
