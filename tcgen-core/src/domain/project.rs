//! Project assembly
//!
//! A provider is tested service by service. The project gathers the build
//! types of every service, resolving per-service overrides against the
//! provider-wide defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use super::build::BuildType;
use super::service::{BuildOptions, ServiceDetails};
use crate::error::ProjectError;

/// Provider-wide test defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TestDefaults {
    pub nightly_tests_enabled: bool,
    pub start_hour: i32,
    pub parallelism: i32,
    pub days_of_week: String,
    pub days_of_month: String,
    /// Minutes
    pub timeout: i32,
    pub disable_triggers: bool,
}

impl Default for TestDefaults {
    fn default() -> Self {
        Self {
            nightly_tests_enabled: true,
            start_hour: 0,
            parallelism: 20,
            days_of_week: "*".to_string(),
            days_of_month: "*".to_string(),
            timeout: 720, // 12 hours
            disable_triggers: false,
        }
    }
}

/// Provider identity shared by all of its services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub provider_name: String,
    pub environment: String,
    pub vcs_root_id: String,

    /// Generate every trigger inactive, whatever the services say
    #[serde(default)]
    pub disable_all_triggers: bool,

    #[serde(default)]
    pub defaults: TestDefaults,
}

/// One service of the provider, keyed by package name in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEntry {
    pub display_name: String,
    #[serde(default)]
    pub parallelism: Option<i32>,
    #[serde(default)]
    pub start_hour: Option<i32>,
    #[serde(default)]
    pub days_of_week: Option<String>,
    #[serde(default)]
    pub days_of_month: Option<String>,
    #[serde(default)]
    pub timeout: Option<i32>,
    #[serde(default)]
    pub disable_triggers: Option<bool>,
}

impl ServiceEntry {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Resolve this entry's overrides against the provider defaults
    pub fn options(&self, settings: &ProviderSettings) -> BuildOptions {
        let defaults = &settings.defaults;
        BuildOptions {
            nightly_tests_enabled: defaults.nightly_tests_enabled,
            start_hour: self.start_hour.unwrap_or(defaults.start_hour),
            parallelism: self.parallelism.unwrap_or(defaults.parallelism),
            days_of_week: self
                .days_of_week
                .clone()
                .unwrap_or_else(|| defaults.days_of_week.clone()),
            days_of_month: self
                .days_of_month
                .clone()
                .unwrap_or_else(|| defaults.days_of_month.clone()),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            disable_triggers: settings.disable_all_triggers
                || self.disable_triggers.unwrap_or(defaults.disable_triggers),
        }
    }
}

/// A service together with the build type generated for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBuild {
    pub service: ServiceDetails,
    pub build_type: BuildType,
}

/// All acceptance-test builds of one provider in one environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub provider_name: String,
    pub environment: String,
    /// Ordered by package name
    pub builds: Vec<ServiceBuild>,
}

impl Project {
    /// Assemble the project for a catalogue of services
    ///
    /// # Arguments
    /// * `settings` - Provider identity and test defaults
    /// * `services` - Catalogue of services keyed by package name
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalogue is empty
    /// - Two packages produce the same build ID
    /// - Two build IDs sanitise to the same Kotlin object name
    pub fn assemble(
        settings: &ProviderSettings,
        services: &BTreeMap<String, ServiceEntry>,
    ) -> Result<Self, ProjectError> {
        if services.is_empty() {
            return Err(ProjectError::NoServices(settings.provider_name.clone()));
        }

        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        let mut objects: BTreeMap<String, &str> = BTreeMap::new();
        let mut builds = Vec::with_capacity(services.len());

        for (package_name, entry) in services {
            let service = ServiceDetails::new(
                package_name.as_str(),
                entry.display_name.as_str(),
                settings.environment.as_str(),
                settings.vcs_root_id.as_str(),
            );
            let options = entry.options(settings);
            warn_on_suspicious_options(package_name, &options);

            let build_type = service.build_configuration(&settings.provider_name, &options);
            if let Some(first) = seen.insert(build_type.id.clone(), package_name) {
                return Err(ProjectError::DuplicateBuildId {
                    id: build_type.id,
                    first: first.to_string(),
                    second: package_name.clone(),
                });
            }
            if let Some(first) = objects.insert(build_type.object_name(), package_name) {
                return Err(ProjectError::DuplicateObjectName {
                    name: build_type.object_name(),
                    first: first.to_string(),
                    second: package_name.clone(),
                });
            }

            debug!(
                "Generated build {} (triggered: {})",
                build_type.id,
                build_type.is_triggered()
            );
            builds.push(ServiceBuild {
                service,
                build_type,
            });
        }

        info!(
            "Assembled {} build(s) for {} ({})",
            builds.len(),
            settings.provider_name,
            settings.environment
        );

        Ok(Self {
            id: format!(
                "{}_{}",
                settings.provider_name.to_uppercase(),
                settings.environment.to_uppercase()
            ),
            name: format!("{} ({})", settings.provider_name, settings.environment),
            provider_name: settings.provider_name.clone(),
            environment: settings.environment.clone(),
            builds,
        })
    }

    pub fn build_types(&self) -> impl Iterator<Item = &BuildType> {
        self.builds.iter().map(|build| &build.build_type)
    }

    pub fn find_package(&self, package_name: &str) -> Option<&ServiceBuild> {
        self.builds
            .iter()
            .find(|build| build.service.package_name() == package_name)
    }
}

/// Values the CI server will likely reject are kept but reported
fn warn_on_suspicious_options(package_name: &str, options: &BuildOptions) {
    if !(0..24).contains(&options.start_hour) {
        warn!(
            "Service '{}' starts at hour {}, outside 0-23",
            package_name, options.start_hour
        );
    }
    if options.parallelism < 1 {
        warn!(
            "Service '{}' has parallelism {}, expected at least 1",
            package_name, options.parallelism
        );
    }
    if options.timeout < 1 {
        warn!(
            "Service '{}' has a timeout of {} minutes",
            package_name, options.timeout
        );
    }
}
