//! Build steps
//!
//! A build type always runs the same three high-level steps. Each one expands
//! into the concrete script steps TeamCity executes.

use serde::{Deserialize, Serialize};

/// Where the provider keeps its service packages
pub const SERVICES_ROOT: &str = "./internal/services";

/// Terraform release archive, parameterised on the configured core version
pub const TERRAFORM_DOWNLOAD_URL: &str = "https://releases.hashicorp.com/terraform/%env.TERRAFORM_CORE_VERSION%/terraform_%env.TERRAFORM_CORE_VERSION%_linux_amd64.zip";

/// Path of a service package relative to the checkout directory
pub fn service_path(package_name: &str) -> String {
    format!("{}/{}", SERVICES_ROOT, package_name)
}

/// A single shell script run by the build agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub name: String,
    pub script_content: String,
    /// Defaults to the checkout directory when unset
    pub working_dir: Option<String>,
}

impl ScriptStep {
    fn new(name: impl Into<String>, script_content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script_content: script_content.into(),
            working_dir: None,
        }
    }

    fn in_dir(mut self, working_dir: impl Into<String>) -> Self {
        self.working_dir = Some(working_dir.into());
        self
    }
}

/// High-level build step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildStep {
    /// Install and select the Go version pinned by the repository
    ConfigureGoEnv,

    /// Fetch the Terraform binary the acceptance tests drive
    DownloadTerraformBinary,

    /// Compile and run the acceptance tests of one package
    RunAcceptanceTests { package_name: String },
}

impl BuildStep {
    /// Expand into the script steps TeamCity runs
    pub fn scripts(&self) -> Vec<ScriptStep> {
        match self {
            BuildStep::ConfigureGoEnv => vec![ScriptStep::new(
                "Configure Go Version",
                "goenv install -s $(goenv local) && goenv rehash",
            )],
            BuildStep::DownloadTerraformBinary => vec![ScriptStep::new(
                "Download Terraform Core v%env.TERRAFORM_CORE_VERSION%",
                format!(
                    "mkdir -p tools && wget -O tf.zip {} && unzip tf.zip && mv terraform tools/",
                    TERRAFORM_DOWNLOAD_URL
                ),
            )],
            BuildStep::RunAcceptanceTests { package_name } => {
                let package_path = service_path(package_name);
                // Some packages keep their tests in a ./tests folder
                let use_tests_dir = format!(
                    "##teamcity[setParameter name='SERVICE_PATH' value='{}/tests']",
                    package_path
                );

                vec![
                    ScriptStep::new(
                        "Determine Working Directory for this Package",
                        format!(
                            "if [ -d \"{}/tests\" ]; then echo \"{}\"; fi",
                            package_path, use_tests_dir
                        ),
                    ),
                    ScriptStep::new("Compile Test Binary", "go test -c -o test-binary")
                        .in_dir("%SERVICE_PATH%"),
                    ScriptStep::new(
                        "Run via jen20/teamcity-go-test",
                        "./test-binary -test.list=\"%TEST_PREFIX%\" | teamcity-go-test -test ./test-binary -parallelism \"%PARALLELISM%\" -timeout \"%TIMEOUT%m\"",
                    )
                    .in_dir("%SERVICE_PATH%"),
                ]
            }
        }
    }
}
