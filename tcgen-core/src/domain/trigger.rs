//! Build triggers

use serde::{Deserialize, Serialize};

/// Only the main branch is built on schedule
pub const NIGHTLY_BRANCH_FILTER: &str = "+:refs/heads/main";

/// Cron expressions are evaluated in the CI server's timezone
pub const SCHEDULE_TIMEZONE: &str = "SERVER";

/// Trigger that starts a build automatically
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    Nightly(NightlyTrigger),
}

impl Trigger {
    pub fn is_enabled(&self) -> bool {
        match self {
            Trigger::Nightly(nightly) => nightly.is_enabled(),
        }
    }
}

/// Scheduled nightly run of the acceptance tests
///
/// The trigger is always declared; the flags only decide whether it is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightlyTrigger {
    pub nightly_tests_enabled: bool,
    pub start_hour: i32,
    pub days_of_week: String,
    pub days_of_month: String,
    pub disable_triggers: bool,
}

impl NightlyTrigger {
    /// `disable_triggers` overrides `nightly_tests_enabled`
    pub fn is_enabled(&self) -> bool {
        self.nightly_tests_enabled && !self.disable_triggers
    }

    /// Cron `hours` field
    pub fn cron_hours(&self) -> String {
        self.start_hour.to_string()
    }

    pub fn branch_filter(&self) -> &'static str {
        NIGHTLY_BRANCH_FILTER
    }

    pub fn timezone(&self) -> &'static str {
        SCHEDULE_TIMEZONE
    }
}
