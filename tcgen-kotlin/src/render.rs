//! Kotlin DSL rendering
//!
//! Produces complete TeamCity Kotlin source: a single `object` per build type,
//! or a full `settings.kts` registering every build of a project.

use tcgen_core::{BuildType, Project};

use crate::dsl::KotlinDsl;
use crate::writer::{KotlinWriter, string_literal};

/// TeamCity DSL version declared in `settings.kts`
pub const DSL_VERSION: &str = "2024.03";

const IMPORTS: &[&str] = &[
    "jetbrains.buildServer.configs.kotlin.*",
    "jetbrains.buildServer.configs.kotlin.buildFeatures.golang",
    "jetbrains.buildServer.configs.kotlin.buildSteps.script",
    "jetbrains.buildServer.configs.kotlin.triggers.schedule",
];

const GENERATED_NOTICE: &str =
    "// Generated by tcgen. Edit the manifest and regenerate instead of changing this file.";

/// Render one build type as a standalone Kotlin file
pub fn render_build_type(build: &BuildType) -> String {
    let mut w = KotlinWriter::new();
    write_header(&mut w);
    write_object(&mut w, build);
    w.finish()
}

/// Render a complete `settings.kts` for a project
pub fn render_settings(project: &Project) -> String {
    let mut w = KotlinWriter::new();
    write_header(&mut w);

    w.line(format!("version = {}", string_literal(DSL_VERSION)));
    w.blank();
    w.block("project", |w| {
        w.assign_str(
            "description",
            &format!("Acceptance tests for {}", project.name),
        );
        w.blank();
        for build in project.build_types() {
            w.line(format!("buildType({})", build.object_name()));
        }
    });

    for build in project.build_types() {
        w.blank();
        write_object(&mut w, build);
    }

    w.finish()
}

fn write_header(w: &mut KotlinWriter) {
    for import in IMPORTS {
        w.line(format!("import {}", import));
    }
    w.blank();
    w.line(GENERATED_NOTICE);
    w.blank();
}

fn write_object(w: &mut KotlinWriter, build: &BuildType) {
    w.delimited(
        &format!("object {} : BuildType({{", build.object_name()),
        "})",
        |w| build.write_kotlin(w),
    );
}
