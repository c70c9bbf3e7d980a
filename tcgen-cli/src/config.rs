//! Configuration module
//!
//! Handles CLI configuration and loading the project it points at.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tcgen_core::{Manifest, Project};
use tracing::{debug, info};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the provider manifest
    pub manifest_path: PathBuf,

    /// Force every trigger inactive
    pub disable_triggers: bool,
}

impl Config {
    /// Load the manifest and assemble its project
    ///
    /// `disable_triggers` is applied on top of whatever the manifest says.
    pub fn load_project(&self) -> Result<Project> {
        debug!("Loading manifest from {}", self.manifest_path.display());

        let mut manifest = Manifest::from_path(&self.manifest_path)
            .with_context(|| format!("Failed to load {}", self.manifest_path.display()))?;

        if self.disable_triggers {
            info!("Triggers disabled for all services");
            manifest.disable_all_triggers = true;
        }

        manifest
            .project()
            .context("Failed to assemble build configurations")
    }
}
