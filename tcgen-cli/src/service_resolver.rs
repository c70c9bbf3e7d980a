//! Service resolver module
//!
//! Resolves a user-supplied service reference to one build of the project.
//! A reference is either an exact package name or an unambiguous,
//! case-insensitive prefix of a build ID.

use anyhow::{Result, anyhow};
use tcgen_core::{Project, ServiceBuild};

/// Resolve a package name or build ID prefix to a service build
///
/// # Arguments
/// * `project` - The assembled project to search
/// * `reference` - Package name or build ID prefix
///
/// # Errors
/// Returns an error if:
/// - No package or build ID matches
/// - Multiple build IDs match the prefix (ambiguous)
pub fn resolve_service<'a>(project: &'a Project, reference: &str) -> Result<&'a ServiceBuild> {
    // An exact package name always wins
    if let Some(build) = project.find_package(reference) {
        return Ok(build);
    }

    let prefix = reference.to_uppercase();
    let matches: Vec<_> = project
        .builds
        .iter()
        .filter(|b| b.build_type.id.starts_with(&prefix))
        .collect();

    match matches.len() {
        0 => Err(anyhow!(
            "No service found with package name or build ID starting with '{}'",
            reference
        )),
        1 => Ok(matches[0]),
        _ => {
            let ids: Vec<&str> = matches.iter().map(|b| b.build_type.id.as_str()).collect();
            Err(anyhow!(
                "Ambiguous reference '{}' matches multiple builds: {}",
                reference,
                ids.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tcgen_core::{ProviderSettings, ServiceEntry, TestDefaults};

    fn project() -> Project {
        let settings = ProviderSettings {
            provider_name: "aws".to_string(),
            environment: "prod".to_string(),
            vcs_root_id: "vcs123".to_string(),
            disable_all_triggers: false,
            defaults: TestDefaults::default(),
        };
        let mut services = BTreeMap::new();
        services.insert("s3".to_string(), ServiceEntry::new("S3"));
        services.insert("s3control".to_string(), ServiceEntry::new("S3 Control"));
        services.insert("ec2".to_string(), ServiceEntry::new("EC2"));
        Project::assemble(&settings, &services).unwrap()
    }

    #[test]
    fn test_exact_package_wins_over_prefix() {
        let project = project();
        let build = resolve_service(&project, "s3").unwrap();
        assert_eq!(build.build_type.id, "AWS_SERVICE_PROD_S3");
    }

    #[test]
    fn test_id_prefix_is_case_insensitive() {
        let project = project();
        let build = resolve_service(&project, "aws_service_prod_ec").unwrap();
        assert_eq!(build.service.package_name(), "ec2");
    }

    #[test]
    fn test_ambiguous_prefix() {
        let project = project();
        let build = resolve_service(&project, "AWS_SERVICE_PROD_S3C").unwrap();
        assert_eq!(build.build_type.id, "AWS_SERVICE_PROD_S3CONTROL");

        let err = resolve_service(&project, "AWS_SERVICE_PROD_S").unwrap_err();
        assert!(err.to_string().contains("Ambiguous"));
    }

    #[test]
    fn test_no_match() {
        let project = project();
        let err = resolve_service(&project, "lambda").unwrap_err();
        assert!(err.to_string().contains("No service found"));
    }
}
