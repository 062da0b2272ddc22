//! Run report types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::RuntimeIdentity;
use crate::ports::OutputLine;

/// How a single check ended, for checks that did not abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Completed,
    Recovered { message: String },
}

impl CheckOutcome {
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRecord {
    pub name: String,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

/// Summary of a run that reached the success marker.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub identity: RuntimeIdentity,
    pub checks: Vec<CheckRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<OutputLine>,
    pub success: bool,
}

impl RunReport {
    /// Attach captured output lines.
    #[must_use]
    pub fn with_output(mut self, output: Vec<OutputLine>) -> Self {
        self.output = output;
        self
    }

    /// Number of checks that reported a recovered failure.
    pub fn recovered_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|record| !record.outcome.is_completed())
            .count()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
