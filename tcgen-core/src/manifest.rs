//! Provider manifest
//!
//! The manifest is a TOML file describing the provider and its services:
//!
//! ```toml
//! provider_name = "azurerm"
//! environment = "public"
//! vcs_root_id = "TF_AzureRM_Repository"
//!
//! [defaults]
//! parallelism = 20
//! timeout = 720
//!
//! [services.network]
//! display_name = "Network"
//! parallelism = 10
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::project::{Project, ProviderSettings, ServiceEntry, TestDefaults};
use crate::error::ManifestError;

/// Unknown keys are rejected at every level, so a misspelt setting fails to
/// parse instead of silently keeping its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub provider_name: String,
    pub environment: String,
    pub vcs_root_id: String,

    /// Generate every trigger inactive, whatever the services say
    #[serde(default)]
    pub disable_all_triggers: bool,

    #[serde(default)]
    pub defaults: TestDefaults,

    /// Services keyed by package name
    #[serde(default)]
    pub services: BTreeMap<String, ServiceEntry>,
}

impl Manifest {
    /// Parse a manifest from TOML source
    pub fn parse(source: &str) -> Result<Self, ManifestError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a manifest file
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let source = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    /// Provider identity and defaults shared by every service
    pub fn settings(&self) -> ProviderSettings {
        ProviderSettings {
            provider_name: self.provider_name.clone(),
            environment: self.environment.clone(),
            vcs_root_id: self.vcs_root_id.clone(),
            disable_all_triggers: self.disable_all_triggers,
            defaults: self.defaults.clone(),
        }
    }

    /// Assemble the project described by this manifest
    pub fn project(&self) -> Result<Project, ManifestError> {
        Ok(Project::assemble(&self.settings(), &self.services)?)
    }
}
