//! Output formats
//!
//! Renders projects and build types and writes them to a file or stdout.

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;
use std::fs;
use std::path::Path;
use tcgen_core::{BuildType, Project};

/// Format of generated configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// TeamCity Kotlin DSL
    #[default]
    Kotlin,
    /// Build configuration records as JSON
    Json,
}

/// Render a whole project
pub fn render_project(project: &Project, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Kotlin => Ok(tcgen_kotlin::render_settings(project)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(project).context("Failed to serialize project")
        }
    }
}

/// Render a single build type
pub fn render_build_type(build: &BuildType, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Kotlin => Ok(tcgen_kotlin::render_build_type(build)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(build).context("Failed to serialize build type")
        }
    }
}

/// Write rendered content to `path`, or to stdout when no path is given
pub fn emit(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("  {} {}", "Wrote".green(), path.display().to_string().cyan());
        }
        None => print!("{}", content),
    }
    Ok(())
}
