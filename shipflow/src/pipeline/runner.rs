//! Sequential stage execution with short-circuit on failure.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::core::StageRecord;
use crate::errors::StageError;
use crate::stages::ports::{Logger, Project};
use crate::stages::{default_stages, Stage};

/// The terminal outcome of one pass over the stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOutcome {
    /// The last executed stage's message, or the failure message.
    pub message: String,
    /// The failure that stopped the run, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<StageError>,
    /// One record per executed stage, in execution order.
    pub records: Vec<StageRecord>,
}

impl RunOutcome {
    /// Returns true if every stage succeeded.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the record of the stage that failed, if any.
    #[must_use]
    pub fn failed_stage(&self) -> Option<&StageRecord> {
        self.records.iter().find(|r| r.status.is_failure())
    }

    /// Returns the names of the stages that executed.
    #[must_use]
    pub fn executed_stages(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// Consumes the outcome and returns the terminal message.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Runs an ordered list of stages against a project.
///
/// Each success is logged at info level and the run continues; the first
/// failure is logged at error level and ends the run. The failure is
/// recovered into the terminal message rather than returned as an error.
#[derive(Clone)]
pub struct StageRunner {
    stages: Vec<Arc<dyn Stage>>,
}

impl Default for StageRunner {
    fn default() -> Self {
        Self::new(default_stages())
    }
}

impl fmt::Debug for StageRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageRunner")
            .field("stages", &self.stage_names())
            .finish()
    }
}

impl StageRunner {
    /// Creates a runner over the given stages, in order.
    #[must_use]
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Returns the stage names in execution order.
    #[must_use]
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Returns the number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if the runner has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Executes the stages against `project`, logging through `logger`.
    pub fn run(&self, project: &dyn Project, logger: &dyn Logger) -> RunOutcome {
        let mut records = Vec::with_capacity(self.stages.len());
        let mut message = String::new();

        for stage in &self.stages {
            let span = tracing::debug_span!("stage", stage = stage.name(), kind = %stage.kind());
            let _guard = span.enter();
            let started_at = Utc::now();

            match stage.execute(project) {
                Ok(msg) => {
                    logger.info(&msg);
                    let record = StageRecord::passed(stage.name(), stage.kind(), started_at, &msg);
                    debug!(status = %record.status, duration_ms = record.duration_ms(), "Stage passed");
                    records.push(record);
                    message = msg;
                }
                Err(error) => {
                    let msg = error.message();
                    logger.error(&msg);
                    let record = StageRecord::failed(stage.name(), stage.kind(), started_at, &msg);
                    debug!(status = %record.status, duration_ms = record.duration_ms(), "Stage failed");
                    records.push(record);
                    return RunOutcome {
                        message: msg,
                        error: Some(error),
                        records,
                    };
                }
            }
        }

        RunOutcome {
            message,
            error: None,
            records,
        }
    }
}
