//! The pipeline composition root.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::info_span;
use uuid::Uuid;

use super::{NotificationDecision, NotificationDispatcher, PipelineBuilder, RunOutcome, StageRunner};
use crate::observability::TracingLogger;
use crate::stages::ports::{Emailer, Logger, NotificationConfig, Project};

/// Everything observable about one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Identifier attached to the run's tracing span.
    pub run_id: Uuid,
    /// The stage runner's outcome.
    pub outcome: RunOutcome,
    /// Whether the summary was sent.
    pub notification: NotificationDecision,
}

impl RunReport {
    /// Returns the terminal message that was dispatched.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.outcome.message
    }
}

/// Runs the stages, then always makes exactly one notification decision.
#[derive(Clone)]
pub struct Pipeline {
    runner: StageRunner,
    dispatcher: NotificationDispatcher,
    logger: Arc<dyn Logger>,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("runner", &self.runner)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

impl Pipeline {
    /// Creates a test-then-deploy pipeline.
    #[must_use]
    pub fn new(
        config: Arc<dyn NotificationConfig>,
        emailer: Arc<dyn Emailer>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self::from_parts(
            StageRunner::default(),
            NotificationDispatcher::new(config, emailer),
            logger,
        )
    }

    /// Creates a test-then-deploy pipeline that logs through `tracing`.
    #[must_use]
    pub fn with_tracing(config: Arc<dyn NotificationConfig>, emailer: Arc<dyn Emailer>) -> Self {
        Self::new(config, emailer, Arc::new(TracingLogger::new()))
    }

    /// Returns a builder for custom stage lists.
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub(crate) fn from_parts(
        runner: StageRunner,
        dispatcher: NotificationDispatcher,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            runner,
            dispatcher,
            logger,
        }
    }

    /// Returns the stage runner.
    #[must_use]
    pub fn runner(&self) -> &StageRunner {
        &self.runner
    }

    /// Runs the pipeline for `project`.
    ///
    /// Stage failures are reported through the log and the notification,
    /// never to the caller.
    pub fn run(&self, project: &dyn Project) {
        let _ = self.run_with_report(project);
    }

    /// Runs the pipeline for `project` and returns what happened.
    pub fn run_with_report(&self, project: &dyn Project) -> RunReport {
        let run_id = Uuid::new_v4();
        let span = info_span!("pipeline_run", %run_id);
        let _guard = span.enter();

        let outcome = self.runner.run(project, self.logger.as_ref());
        let notification = self.dispatcher.dispatch(&outcome.message, self.logger.as_ref());

        tracing::debug!(
            succeeded = outcome.succeeded(),
            stages = outcome.records.len(),
            %notification,
            "Pipeline run finished"
        );

        RunReport {
            run_id,
            outcome,
            notification,
        }
    }
}
