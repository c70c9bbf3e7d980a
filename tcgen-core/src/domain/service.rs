//! Service descriptor
//!
//! A service is one testable package of the provider within one deployment
//! environment. It only holds identifying metadata; the acceptance-test build
//! for it is assembled on demand by [`ServiceDetails::build_configuration`].

use serde::{Deserialize, Serialize};

use super::build::{BuildFeature, BuildType, FailureConditions, VcsSettings};
use super::params::{ParameterBlock, TEST_PREFIX};
use super::step::BuildStep;
use super::trigger::{NightlyTrigger, Trigger};

/// Runtime and scheduling options for one acceptance-test build
///
/// Values are not validated here. Whatever is given ends up in the build
/// configuration and the CI server decides whether it accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Whether the nightly run is wanted at all
    pub nightly_tests_enabled: bool,

    /// Hour of the day (server time) the nightly run starts
    pub start_hour: i32,

    /// Number of tests run in parallel
    pub parallelism: i32,

    /// Cron day-of-week expression, passed through untouched
    pub days_of_week: String,

    /// Cron day-of-month expression, passed through untouched
    pub days_of_month: String,

    /// Test timeout in minutes
    pub timeout: i32,

    /// Keeps the nightly trigger inactive regardless of `nightly_tests_enabled`
    pub disable_triggers: bool,
}

/// Identifying metadata for one package within one environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceDetails {
    package_name: String,
    display_name: String,
    environment: String,
    vcs_root_id: String,
}

impl ServiceDetails {
    /// Creates a service descriptor. Any string is accepted, including empty ones.
    pub fn new(
        package_name: impl Into<String>,
        display_name: impl Into<String>,
        environment: impl Into<String>,
        vcs_root_id: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            display_name: display_name.into(),
            environment: environment.into(),
            vcs_root_id: vcs_root_id.into(),
        }
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// ID of the VCS root on the CI server. The root itself is managed there.
    pub fn vcs_root_id(&self) -> &str {
        &self.vcs_root_id
    }

    /// Build ID of this service under the given provider
    ///
    /// Format: `<PROVIDER>_SERVICE_<ENVIRONMENT>_<PACKAGE>`, all upper-case.
    /// TeamCity needs the same ID on every regeneration of a dynamically
    /// generated build, so this depends on nothing but its inputs.
    pub fn unique_id(&self, provider_name: &str) -> String {
        format!(
            "{}_SERVICE_{}_{}",
            provider_name.to_uppercase(),
            self.environment.to_uppercase(),
            self.package_name.to_uppercase()
        )
    }

    /// Assemble the acceptance-test build configuration for this service
    ///
    /// # Arguments
    /// * `provider_name` - Provider the service belongs to, used for the build ID only
    /// * `options` - Schedule and runtime options of the build
    ///
    /// # Returns
    /// A freshly built `BuildType`; nothing is shared with previous calls
    pub fn build_configuration(&self, provider_name: &str, options: &BuildOptions) -> BuildType {
        BuildType {
            id: self.unique_id(provider_name),
            name: format!("{} - Acceptance Tests", self.display_name),
            vcs: VcsSettings {
                root_id: self.vcs_root_id.clone(),
                clean_checkout: true,
            },
            steps: vec![
                BuildStep::ConfigureGoEnv,
                BuildStep::DownloadTerraformBinary,
                BuildStep::RunAcceptanceTests {
                    package_name: self.package_name.clone(),
                },
            ],
            failure_conditions: FailureConditions {
                error_message: true,
                execution_timeout_secs: 60 * i64::from(options.timeout),
            },
            features: vec![BuildFeature::Golang],
            params: vec![
                ParameterBlock::AcceptanceTestParameters {
                    parallelism: options.parallelism,
                    test_prefix: TEST_PREFIX.to_string(),
                    timeout: options.timeout,
                },
                ParameterBlock::AcceptanceTestsFlag,
                ParameterBlock::CoreBinaryTesting,
                ParameterBlock::ShouldPanicForSchemaErrors,
                ParameterBlock::ReadOnlySettings,
                ParameterBlock::WorkingDirectory {
                    package_name: self.package_name.clone(),
                },
            ],
            triggers: vec![Trigger::Nightly(NightlyTrigger {
                nightly_tests_enabled: options.nightly_tests_enabled,
                start_hour: options.start_hour,
                days_of_week: options.days_of_week.clone(),
                days_of_month: options.days_of_month.clone(),
                disable_triggers: options.disable_triggers,
            })],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn s3_service() -> ServiceDetails {
        ServiceDetails::new("s3", "S3 Service", "prod", "vcs123")
    }

    fn options() -> BuildOptions {
        BuildOptions {
            nightly_tests_enabled: true,
            start_hour: 2,
            parallelism: 4,
            days_of_week: "Mon,Wed".to_string(),
            days_of_month: String::new(),
            timeout: 30,
            disable_triggers: false,
        }
    }

    #[test]
    fn test_fields_round_trip() {
        let service = s3_service();
        assert_eq!(service.package_name(), "s3");
        assert_eq!(service.display_name(), "S3 Service");
        assert_eq!(service.environment(), "prod");
        assert_eq!(service.vcs_root_id(), "vcs123");
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        let service = ServiceDetails::new("", "", "", "");
        assert_eq!(service.package_name(), "");
        assert_eq!(service.vcs_root_id(), "");
        assert_eq!(service.unique_id(""), "_SERVICE__");
        let build = service.build_configuration("", &options());
        assert_eq!(build.name, " - Acceptance Tests");
    }

    #[test]
    fn test_build_configuration_example() {
        let build = s3_service().build_configuration("aws", &options());

        assert_eq!(build.id, "AWS_SERVICE_PROD_S3");
        assert_eq!(build.name, "S3 Service - Acceptance Tests");
        assert_eq!(build.failure_conditions.execution_timeout_secs, 1800);
        assert!(build.failure_conditions.error_message);

        let trigger = build.nightly_trigger().unwrap();
        assert!(trigger.is_enabled());
        assert_eq!(trigger.start_hour, 2);
        assert_eq!(trigger.days_of_week, "Mon,Wed");
        assert_eq!(trigger.days_of_month, "");

        assert_eq!(
            build.params[0],
            ParameterBlock::AcceptanceTestParameters {
                parallelism: 4,
                test_prefix: "TestAcc".to_string(),
                timeout: 30,
            }
        );
        assert_eq!(
            build.params[5],
            ParameterBlock::WorkingDirectory {
                package_name: "s3".to_string(),
            }
        );
    }

    #[test]
    fn test_vcs_binding_requests_clean_checkout() {
        let build = s3_service().build_configuration("aws", &options());
        assert_eq!(build.vcs.root_id, "vcs123");
        assert!(build.vcs.clean_checkout);
    }

    #[test]
    fn test_fixed_blocks() {
        let build = s3_service().build_configuration("aws", &options());

        assert_eq!(
            build.steps,
            vec![
                BuildStep::ConfigureGoEnv,
                BuildStep::DownloadTerraformBinary,
                BuildStep::RunAcceptanceTests {
                    package_name: "s3".to_string()
                },
            ]
        );
        assert_eq!(build.features, vec![BuildFeature::Golang]);
        assert_eq!(build.params.len(), 6);
        assert!(matches!(build.params[1], ParameterBlock::AcceptanceTestsFlag));
        assert!(matches!(build.params[2], ParameterBlock::CoreBinaryTesting));
        assert!(matches!(
            build.params[3],
            ParameterBlock::ShouldPanicForSchemaErrors
        ));
        assert!(matches!(build.params[4], ParameterBlock::ReadOnlySettings));
        assert_eq!(build.triggers.len(), 1);
    }

    #[test]
    fn test_disable_triggers_keeps_inactive_trigger() {
        let mut opts = options();
        opts.disable_triggers = true;

        let build = s3_service().build_configuration("aws", &opts);
        let trigger = build.nightly_trigger().unwrap();
        assert!(!trigger.is_enabled());
        assert!(!build.is_triggered());
    }

    #[test]
    fn test_nightly_disabled() {
        let mut opts = options();
        opts.nightly_tests_enabled = false;

        let build = s3_service().build_configuration("aws", &opts);
        assert_eq!(build.triggers.len(), 1);
        assert!(!build.is_triggered());
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let service = s3_service();
        let first = service.build_configuration("aws", &options());
        let second = service.build_configuration("aws", &options());
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_timeout_propagates() {
        let mut opts = options();
        opts.timeout = -5;

        let build = s3_service().build_configuration("aws", &opts);
        assert_eq!(build.failure_conditions.execution_timeout_secs, -300);
    }

    #[test]
    fn test_extreme_timeout_does_not_overflow() {
        let mut opts = options();
        opts.timeout = i32::MAX;

        let build = s3_service().build_configuration("aws", &opts);
        assert_eq!(
            build.failure_conditions.execution_timeout_secs,
            i64::from(i32::MAX) * 60
        );
    }

    proptest! {
        #[test]
        fn prop_fields_round_trip(
            package in ".*",
            display in ".*",
            environment in ".*",
            vcs_root_id in ".*",
        ) {
            let service = ServiceDetails::new(
                package.clone(),
                display.clone(),
                environment.clone(),
                vcs_root_id.clone(),
            );
            prop_assert_eq!(service.package_name(), package.as_str());
            prop_assert_eq!(service.display_name(), display.as_str());
            prop_assert_eq!(service.environment(), environment.as_str());
            prop_assert_eq!(service.vcs_root_id(), vcs_root_id.as_str());
        }

        #[test]
        fn prop_unique_id_is_uppercased_concatenation(
            provider in "[a-zA-Z0-9]{0,12}",
            environment in "[a-zA-Z0-9]{0,12}",
            package in "[a-zA-Z0-9]{0,12}",
        ) {
            let service = ServiceDetails::new(package.clone(), "Display", environment.clone(), "root");
            let expected = format!(
                "{}_SERVICE_{}_{}",
                provider.to_uppercase(),
                environment.to_uppercase(),
                package.to_uppercase()
            );
            prop_assert_eq!(service.unique_id(&provider), expected.clone());
            prop_assert_eq!(service.unique_id(&provider.to_lowercase()), expected);
        }

        #[test]
        fn prop_timeout_is_scaled_by_sixty(timeout in any::<i32>()) {
            let mut opts = options();
            opts.timeout = timeout;
            let build = s3_service().build_configuration("aws", &opts);
            prop_assert_eq!(build.failure_conditions.execution_timeout_secs, i64::from(timeout) * 60);
        }

        #[test]
        fn prop_display_name_suffix(display in ".*") {
            let service = ServiceDetails::new("pkg", display, "env", "root");
            let build = service.build_configuration("p", &options());
            prop_assert!(build.name.ends_with(" - Acceptance Tests"));
        }

        #[test]
        fn prop_disable_triggers_wins(nightly in any::<bool>(), hour in 0i32..24) {
            let mut opts = options();
            opts.nightly_tests_enabled = nightly;
            opts.start_hour = hour;
            opts.disable_triggers = true;
            let build = s3_service().build_configuration("aws", &opts);
            prop_assert_eq!(build.triggers.len(), 1);
            prop_assert!(!build.is_triggered());
        }
    }
}
