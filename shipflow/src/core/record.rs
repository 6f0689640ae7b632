//! Per-stage execution records.

use super::{StageKind, StageStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What the runner observed while executing one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRecord {
    /// Stage name.
    pub name: String,
    /// Stage kind.
    pub kind: StageKind,
    /// Final status.
    pub status: StageStatus,
    /// Success message, or the failure message.
    pub message: String,
    /// When the stage started.
    pub started_at: DateTime<Utc>,
    /// When the stage ended.
    pub ended_at: DateTime<Utc>,
}

impl StageRecord {
    /// Creates a passed stage record ending now.
    #[must_use]
    pub fn passed(
        name: impl Into<String>,
        kind: StageKind,
        started_at: DateTime<Utc>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            status: StageStatus::Passed,
            message: message.into(),
            started_at,
            ended_at: Utc::now(),
        }
    }

    /// Creates a failed stage record ending now.
    #[must_use]
    pub fn failed(
        name: impl Into<String>,
        kind: StageKind,
        started_at: DateTime<Utc>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            status: StageStatus::Failed,
            message: message.into(),
            started_at,
            ended_at: Utc::now(),
        }
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_ms(&self) -> f64 {
        (self.ended_at - self.started_at).num_milliseconds() as f64
    }

    /// Returns true if the stage succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
