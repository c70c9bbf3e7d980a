//! tcgen Core
//!
//! Core types for generating TeamCity acceptance-test build configurations
//! for a Terraform provider.
//!
//! This crate contains:
//! - Domain types: service descriptors and the build configuration they produce
//! - Project assembly: every service of a provider under one project
//! - Manifest: the TOML description of a provider and its services

pub mod domain;
pub mod error;
pub mod manifest;

pub use domain::build::{BuildFeature, BuildType, FailureConditions, VcsSettings, object_name};
pub use domain::params::{Parameter, ParameterBlock, ParameterDisplay};
pub use domain::project::{Project, ProviderSettings, ServiceBuild, ServiceEntry, TestDefaults};
pub use domain::service::{BuildOptions, ServiceDetails};
pub use domain::step::{BuildStep, ScriptStep};
pub use domain::trigger::{NightlyTrigger, Trigger};
pub use error::{ManifestError, ProjectError};
pub use manifest::Manifest;
