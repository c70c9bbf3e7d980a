//! tcgen Kotlin DSL
//!
//! Renders build configurations as TeamCity Kotlin DSL.
//! It includes:
//! - An indenting writer with Kotlin string escaping
//! - The `KotlinDsl` trait, implemented by every build-type block
//! - File-level rendering of single build types and whole projects

pub mod dsl;
pub mod render;
pub mod writer;

pub use dsl::KotlinDsl;
pub use render::{render_build_type, render_settings};
pub use writer::KotlinWriter;
