//! Build configuration record
//!
//! The declarative description of one TeamCity build type. It is plain data:
//! renderers turn it into Kotlin DSL or JSON, nothing here talks to TeamCity.

use serde::{Deserialize, Serialize};

use super::params::{Parameter, ParameterBlock};
use super::step::{BuildStep, ScriptStep};
use super::trigger::{NightlyTrigger, Trigger};

/// Test output format reported by the Go build feature
pub const GO_TEST_FORMAT: &str = "json";

/// An acceptance-test build type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildType {
    /// Stable build ID (`<PROVIDER>_SERVICE_<ENVIRONMENT>_<PACKAGE>`)
    pub id: String,

    /// Name shown in the TeamCity UI
    pub name: String,

    pub vcs: VcsSettings,

    /// High-level steps, in execution order
    pub steps: Vec<BuildStep>,

    pub failure_conditions: FailureConditions,

    pub features: Vec<BuildFeature>,

    /// Parameter blocks, in declaration order
    pub params: Vec<ParameterBlock>,

    pub triggers: Vec<Trigger>,
}

impl BuildType {
    /// All concrete script steps, in execution order
    pub fn scripts(&self) -> Vec<ScriptStep> {
        self.steps.iter().flat_map(BuildStep::scripts).collect()
    }

    /// All parameters declared by the parameter blocks, in declaration order
    pub fn parameters(&self) -> Vec<Parameter> {
        self.params
            .iter()
            .flat_map(ParameterBlock::parameters)
            .collect()
    }

    /// Look up a flattened parameter by name
    pub fn parameter(&self, name: &str) -> Option<Parameter> {
        self.parameters().into_iter().find(|p| p.name == name)
    }

    pub fn nightly_trigger(&self) -> Option<&NightlyTrigger> {
        self.triggers.iter().find_map(|trigger| match trigger {
            Trigger::Nightly(nightly) => Some(nightly),
        })
    }

    /// Whether any trigger will start this build automatically
    pub fn is_triggered(&self) -> bool {
        self.triggers.iter().any(Trigger::is_enabled)
    }

    /// Name of the Kotlin `object` declaring this build type
    pub fn object_name(&self) -> String {
        object_name(&self.id)
    }
}

/// Turn a build ID into a valid Kotlin identifier
///
/// Anything outside `[A-Za-z0-9_]` becomes `_`, so distinct IDs can map to the
/// same name. Project assembly rejects such pairs.
pub fn object_name(id: &str) -> String {
    let mut out: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// VCS binding of a build type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcsSettings {
    /// Absolute ID of a VCS root owned by the CI server
    pub root_id: String,

    /// Wipe the checkout directory before every build
    pub clean_checkout: bool,
}

/// Conditions under which TeamCity fails a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureConditions {
    /// Fail when the build log contains an error message
    pub error_message: bool,

    /// Execution timeout: 60 times the configured test timeout
    pub execution_timeout_secs: i64,
}

/// Build features enabled on a build type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildFeature {
    /// Go language support: parses `go test` output into test results
    Golang,
}

impl BuildFeature {
    pub fn test_format(&self) -> &'static str {
        match self {
            BuildFeature::Golang => GO_TEST_FORMAT,
        }
    }
}
