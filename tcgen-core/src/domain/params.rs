//! Build parameters
//!
//! Parameters are declared in blocks. A block is what the build configuration
//! records; [`ParameterBlock::parameters`] expands it into the key/value
//! parameters TeamCity sees.

use serde::{Deserialize, Serialize};

use super::step::service_path;

/// Test-name filter passed to the test binary
pub const TEST_PREFIX: &str = "TestAcc";

/// Terraform version the acceptance tests run against
pub const DEFAULT_TERRAFORM_CORE_VERSION: &str = "1.5.7";

/// Visibility of a parameter in the TeamCity UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterDisplay {
    Normal,
    Hidden,
}

/// A single build parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    pub description: Option<String>,
    pub display: ParameterDisplay,
}

impl Parameter {
    fn text(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            description: None,
            display: ParameterDisplay::Normal,
        }
    }

    fn hidden(name: &str, value: impl Into<String>, description: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
            description: Some(description.to_string()),
            display: ParameterDisplay::Hidden,
        }
    }
}

/// A group of related parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterBlock {
    /// Knobs of the test run. `timeout` is in minutes.
    AcceptanceTestParameters {
        parallelism: i32,
        test_prefix: String,
        timeout: i32,
    },

    /// Turns acceptance tests on (`TF_ACC`)
    AcceptanceTestsFlag,

    /// Points the tests at the downloaded Terraform binary
    CoreBinaryTesting,

    /// Make the provider panic on schema errors instead of warning
    ShouldPanicForSchemaErrors,

    /// Configuration is only editable through the DSL
    ReadOnlySettings,

    /// Directory the tests run in
    WorkingDirectory { package_name: String },
}

impl ParameterBlock {
    pub fn parameters(&self) -> Vec<Parameter> {
        match self {
            ParameterBlock::AcceptanceTestParameters {
                parallelism,
                test_prefix,
                timeout,
            } => vec![
                Parameter::text("PARALLELISM", parallelism.to_string()),
                Parameter::text("TEST_PREFIX", test_prefix.as_str()),
                Parameter::text("TIMEOUT", timeout.to_string()),
            ],
            ParameterBlock::AcceptanceTestsFlag => vec![Parameter::hidden(
                "env.TF_ACC",
                "1",
                "Set to a value to run the Acceptance Tests",
            )],
            ParameterBlock::CoreBinaryTesting => vec![
                Parameter {
                    description: Some(
                        "The version of Terraform Core which should be used for testing"
                            .to_string(),
                    ),
                    ..Parameter::text("env.TERRAFORM_CORE_VERSION", DEFAULT_TERRAFORM_CORE_VERSION)
                },
                Parameter::hidden(
                    "env.TF_ACC_TERRAFORM_PATH",
                    "%system.teamcity.build.checkoutDir%/tools/terraform",
                    "The path where the Terraform Binary is located",
                ),
            ],
            ParameterBlock::ShouldPanicForSchemaErrors => vec![Parameter::hidden(
                "env.TF_SCHEMA_PANIC_ON_ERROR",
                "1",
                "Panic if unknown/unmatched fields are set into the state",
            )],
            ParameterBlock::ReadOnlySettings => vec![Parameter::hidden(
                "teamcity.ui.settings.readOnly",
                "true",
                "Requires build configurations be edited via Kotlin",
            )],
            ParameterBlock::WorkingDirectory { package_name } => vec![Parameter::hidden(
                "SERVICE_PATH",
                service_path(package_name),
                "The path at which to run - automatically updated",
            )],
        }
    }
}
