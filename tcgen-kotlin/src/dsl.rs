//! Kotlin DSL blocks
//!
//! Every building block of a build type knows how to write itself as
//! TeamCity Kotlin DSL. Renderers compose them through [`KotlinDsl`].

use tcgen_core::{
    BuildFeature, BuildStep, BuildType, FailureConditions, NightlyTrigger, Parameter,
    ParameterBlock, ParameterDisplay, ScriptStep, Trigger, VcsSettings,
};

use crate::writer::{KotlinWriter, string_literal};

/// A value that can be written as TeamCity Kotlin DSL.
///
/// # Example
///
/// ```rust
/// use tcgen_core::VcsSettings;
/// use tcgen_kotlin::{KotlinDsl, KotlinWriter};
///
/// let vcs = VcsSettings {
///     root_id: "TF_Repository".to_string(),
///     clean_checkout: true,
/// };
///
/// let mut writer = KotlinWriter::new();
/// vcs.write_kotlin(&mut writer);
/// assert!(writer.finish().contains("root(AbsoluteId(\"TF_Repository\"))"));
/// ```
pub trait KotlinDsl {
    /// Write this block at the writer's current indentation
    fn write_kotlin(&self, w: &mut KotlinWriter);
}

impl KotlinDsl for VcsSettings {
    fn write_kotlin(&self, w: &mut KotlinWriter) {
        w.block("vcs", |w| {
            w.line(format!("root(AbsoluteId({}))", string_literal(&self.root_id)));
            w.assign("cleanCheckout", self.clean_checkout);
        });
    }
}

impl KotlinDsl for ScriptStep {
    fn write_kotlin(&self, w: &mut KotlinWriter) {
        w.block("script", |w| {
            w.assign_str("name", &self.name);
            w.assign_str("scriptContent", &self.script_content);
            if let Some(dir) = &self.working_dir {
                w.assign_str("workingDir", dir);
            }
        });
    }
}

impl KotlinDsl for BuildStep {
    fn write_kotlin(&self, w: &mut KotlinWriter) {
        for script in self.scripts() {
            script.write_kotlin(w);
        }
    }
}

impl KotlinDsl for FailureConditions {
    fn write_kotlin(&self, w: &mut KotlinWriter) {
        w.block("failureConditions", |w| {
            w.assign("errorMessage", self.error_message);
            // Written as computed: 60 times the configured timeout
            w.assign("executionTimeoutMin", self.execution_timeout_secs);
        });
    }
}

impl KotlinDsl for BuildFeature {
    fn write_kotlin(&self, w: &mut KotlinWriter) {
        match self {
            BuildFeature::Golang => w.block("golang", |w| {
                w.assign_str("testFormat", self.test_format());
            }),
        }
    }
}

impl KotlinDsl for Parameter {
    fn write_kotlin(&self, w: &mut KotlinWriter) {
        let mut args = vec![string_literal(&self.name), string_literal(&self.value)];
        if let Some(description) = &self.description {
            args.push(format!("description = {}", string_literal(description)));
        }
        if self.display == ParameterDisplay::Hidden {
            args.push("display = ParameterDisplay.HIDDEN".to_string());
        }
        w.line(format!("text({})", args.join(", ")));
    }
}

impl KotlinDsl for ParameterBlock {
    fn write_kotlin(&self, w: &mut KotlinWriter) {
        for parameter in self.parameters() {
            parameter.write_kotlin(w);
        }
    }
}

impl KotlinDsl for NightlyTrigger {
    fn write_kotlin(&self, w: &mut KotlinWriter) {
        w.block("schedule", |w| {
            w.assign("enabled", self.is_enabled());
            w.assign_str("branchFilter", self.branch_filter());
            w.blank();
            w.block("schedulingPolicy = cron", |w| {
                w.assign_str("hours", &self.cron_hours());
                w.assign_str("timezone", self.timezone());
                w.blank();
                w.assign_str("dayOfWeek", &self.days_of_week);
                w.assign_str("dayOfMonth", &self.days_of_month);
            });
            w.assign("triggerBuild", "always()");
            w.assign("withPendingChangesOnly", false);
        });
    }
}

impl KotlinDsl for Trigger {
    fn write_kotlin(&self, w: &mut KotlinWriter) {
        match self {
            Trigger::Nightly(nightly) => nightly.write_kotlin(w),
        }
    }
}

/// Body of `BuildType({ ... })`
impl KotlinDsl for BuildType {
    fn write_kotlin(&self, w: &mut KotlinWriter) {
        w.line(format!("id({})", string_literal(&self.id)));
        w.assign_str("name", &self.name);
        w.blank();
        self.vcs.write_kotlin(w);
        w.blank();
        w.block("steps", |w| write_all(w, &self.steps));
        w.blank();
        self.failure_conditions.write_kotlin(w);
        w.blank();
        w.block("features", |w| write_all(w, &self.features));
        w.blank();
        w.block("params", |w| write_all(w, &self.params));
        w.blank();
        w.block("triggers", |w| write_all(w, &self.triggers));
    }
}

fn write_all<T: KotlinDsl>(w: &mut KotlinWriter, items: &[T]) {
    for item in items {
        item.write_kotlin(w);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(block: &impl KotlinDsl) -> String {
        let mut w = KotlinWriter::new();
        block.write_kotlin(&mut w);
        w.finish()
    }

    #[test]
    fn test_failure_conditions_keep_scaled_timeout() {
        let out = render(&FailureConditions {
            error_message: true,
            execution_timeout_secs: 1800,
        });
        assert_eq!(
            out,
            "failureConditions {\n    errorMessage = true\n    executionTimeoutMin = 1800\n}\n"
        );
    }

    #[test]
    fn test_script_escapes_shell() {
        let out = render(&BuildStep::ConfigureGoEnv);
        assert!(out.contains(r#"scriptContent = "goenv install -s \$(goenv local) && goenv rehash""#));
        assert!(!out.contains("workingDir"));
    }

    #[test]
    fn test_script_working_dir() {
        let out = render(&BuildStep::RunAcceptanceTests {
            package_name: "s3".to_string(),
        });
        assert_eq!(out.matches("script {").count(), 3);
        assert_eq!(out.matches(r#"workingDir = "%SERVICE_PATH%""#).count(), 2);
    }

    #[test]
    fn test_parameters() {
        let out = render(&ParameterBlock::AcceptanceTestParameters {
            parallelism: 4,
            test_prefix: "TestAcc".to_string(),
            timeout: 30,
        });
        assert_eq!(
            out,
            "text(\"PARALLELISM\", \"4\")\ntext(\"TEST_PREFIX\", \"TestAcc\")\ntext(\"TIMEOUT\", \"30\")\n"
        );

        let out = render(&ParameterBlock::AcceptanceTestsFlag);
        assert_eq!(
            out,
            "text(\"env.TF_ACC\", \"1\", description = \"Set to a value to run the Acceptance Tests\", display = ParameterDisplay.HIDDEN)\n"
        );
    }

    #[test]
    fn test_nightly_trigger() {
        let out = render(&Trigger::Nightly(NightlyTrigger {
            nightly_tests_enabled: true,
            start_hour: 2,
            days_of_week: "Mon,Wed".to_string(),
            days_of_month: String::new(),
            disable_triggers: true,
        }));

        assert!(out.starts_with("schedule {\n    enabled = false\n"));
        assert!(out.contains("    schedulingPolicy = cron {\n        hours = \"2\"\n"));
        assert!(out.contains("dayOfWeek = \"Mon,Wed\""));
        assert!(out.contains("dayOfMonth = \"\""));
        assert!(out.contains("triggerBuild = always()"));
    }

    #[test]
    fn test_golang_feature() {
        assert_eq!(
            render(&BuildFeature::Golang),
            "golang {\n    testFormat = \"json\"\n}\n"
        );
    }
}
