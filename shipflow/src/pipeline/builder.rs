//! Pipeline builder.

use std::sync::Arc;

use super::{NotificationDispatcher, Pipeline, StageRunner};
use crate::errors::{Result, ShipflowError};
use crate::observability::TracingLogger;
use crate::stages::ports::{Emailer, Logger, NotificationConfig};
use crate::stages::{default_stages, Stage};

/// Builder for pipelines with custom collaborators or stages.
#[derive(Default)]
pub struct PipelineBuilder {
    config: Option<Arc<dyn NotificationConfig>>,
    emailer: Option<Arc<dyn Emailer>>,
    logger: Option<Arc<dyn Logger>>,
    stages: Option<Vec<Arc<dyn Stage>>>,
}

impl std::fmt::Debug for PipelineBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineBuilder")
            .field("has_config", &self.config.is_some())
            .field("has_emailer", &self.emailer.is_some())
            .field("has_logger", &self.logger.is_some())
            .field("stage_count", &self.stages.as_ref().map(Vec::len))
            .finish()
    }
}

impl PipelineBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the notification config.
    #[must_use]
    pub fn config(mut self, config: Arc<dyn NotificationConfig>) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets the emailer.
    #[must_use]
    pub fn emailer(mut self, emailer: Arc<dyn Emailer>) -> Self {
        self.emailer = Some(emailer);
        self
    }

    /// Sets the logger. Defaults to [`TracingLogger`].
    #[must_use]
    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Replaces the default test-then-deploy stages.
    #[must_use]
    pub fn stages(mut self, stages: Vec<Arc<dyn Stage>>) -> Self {
        self.stages = Some(stages);
        self
    }

    /// Appends a stage, starting from the defaults if none were set.
    #[must_use]
    pub fn stage(mut self, stage: Arc<dyn Stage>) -> Self {
        self.stages.get_or_insert_with(default_stages).push(stage);
        self
    }

    /// Builds the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ShipflowError::MissingCollaborator`] if no config or no
    /// emailer was supplied.
    pub fn build(self) -> Result<Pipeline> {
        let config = self
            .config
            .ok_or(ShipflowError::MissingCollaborator("config"))?;
        let emailer = self
            .emailer
            .ok_or(ShipflowError::MissingCollaborator("emailer"))?;
        let logger = self
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger::new()));
        let runner = self
            .stages
            .map_or_else(StageRunner::default, StageRunner::new);

        Ok(Pipeline::from_parts(
            runner,
            NotificationDispatcher::new(config, emailer),
            logger,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StageKind;
    use crate::stages::FnStage;
    use crate::testing::{RecordingEmailer, StaticConfig};

    #[test]
    fn test_build_requires_config() {
        let err = PipelineBuilder::new()
            .emailer(Arc::new(RecordingEmailer::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, ShipflowError::MissingCollaborator("config")));
    }

    #[test]
    fn test_build_requires_emailer() {
        let err = PipelineBuilder::new()
            .config(Arc::new(StaticConfig::enabled()))
            .build()
            .unwrap_err();
        assert!(matches!(err, ShipflowError::MissingCollaborator("emailer")));
    }

    #[test]
    fn test_build_defaults_to_test_then_deploy() {
        let pipeline = PipelineBuilder::new()
            .config(Arc::new(StaticConfig::disabled()))
            .emailer(Arc::new(RecordingEmailer::new()))
            .build()
            .unwrap();

        assert_eq!(pipeline.runner().stage_names(), vec!["test", "deploy"]);
    }

    #[test]
    fn test_stage_appends_after_defaults() {
        let builder = PipelineBuilder::new()
            .config(Arc::new(StaticConfig::disabled()))
            .emailer(Arc::new(RecordingEmailer::new()))
            .stage(Arc::new(FnStage::new("announce", StageKind::Deploy, |_p| {
                Ok("Announced".to_string())
            })));
        assert!(format!("{builder:?}").contains("stage_count: Some(3)"));

        let pipeline = builder.build().unwrap();
        assert_eq!(
            pipeline.runner().stage_names(),
            vec!["test", "deploy", "announce"]
        );
    }
}
