//! Error types for project assembly and manifest loading

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while assembling a provider's project
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The provider has no services to build
    #[error("no services defined for provider '{0}'")]
    NoServices(String),

    /// Two packages map to the same build ID once upper-cased
    #[error("build id '{id}' is generated by both '{first}' and '{second}'")]
    DuplicateBuildId {
        id: String,
        first: String,
        second: String,
    },

    /// Two build IDs differ only in characters a Kotlin identifier cannot hold
    #[error("kotlin object '{name}' is generated by both '{first}' and '{second}'")]
    DuplicateObjectName {
        name: String,
        first: String,
        second: String,
    },
}

/// Errors raised while loading a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read
    #[error("failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or does not match the expected shape
    #[error("failed to parse manifest: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Project(#[from] ProjectError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message() {
        let err = ProjectError::DuplicateBuildId {
            id: "AWS_SERVICE_PROD_S3".to_string(),
            first: "S3".to_string(),
            second: "s3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "build id 'AWS_SERVICE_PROD_S3' is generated by both 'S3' and 's3'"
        );
    }

    #[test]
    fn test_duplicate_object_message() {
        let err = ProjectError::DuplicateObjectName {
            name: "AWS_SERVICE_PROD_S3_X".to_string(),
            first: "s3-x".to_string(),
            second: "s3_x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "kotlin object 'AWS_SERVICE_PROD_S3_X' is generated by both 's3-x' and 's3_x'"
        );
    }

    #[test]
    fn test_project_error_is_transparent() {
        let err: ManifestError = ProjectError::NoServices("aws".to_string()).into();
        assert_eq!(err.to_string(), "no services defined for provider 'aws'");
    }
}
