//! Generate command handler

use anyhow::Result;
use colored::*;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::output::{self, OutputFormat};

/// Generate the whole project and write it out
pub fn generate(config: &Config, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let project = config.load_project()?;
    let rendered = output::render_project(&project, format)?;

    info!(
        "Rendered {} build(s) as {:?}",
        project.builds.len(),
        format
    );
    output::emit(&rendered, output)?;

    if output.is_some() {
        let triggered = project.build_types().filter(|b| b.is_triggered()).count();
        eprintln!(
            "{}",
            format!(
                "✓ Generated {} build configuration(s), {} with an active nightly trigger",
                project.builds.len(),
                triggered
            )
            .green()
            .bold()
        );
    }

    Ok(())
}
