//! Core domain types
//!
//! A `ServiceDetails` describes one package of the provider in one environment
//! and produces a `BuildType`. The building blocks of a build type (steps,
//! parameters, triggers) live in their own modules so renderers can walk them.

pub mod build;
pub mod params;
pub mod project;
pub mod service;
pub mod step;
pub mod trigger;
