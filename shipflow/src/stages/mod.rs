//! Stage trait and the built-in test and deploy stages.
//!
//! Stages are the units of work a pipeline sequences. Each one reads the
//! project and yields either a success message or a typed [`StageError`].

pub mod ports;

use crate::core::StageKind;
use crate::errors::StageError;
use ports::{is_successful, Project};
use std::fmt::Debug;
use std::sync::Arc;

/// Trait for pipeline stages.
pub trait Stage: Send + Sync + Debug {
    /// Returns the name of the stage.
    fn name(&self) -> &str;

    /// Returns the kind of work this stage performs.
    fn kind(&self) -> StageKind;

    /// Executes the stage against a project.
    ///
    /// # Errors
    ///
    /// Returns the stage's [`StageError`] variant when the project reports
    /// anything other than success.
    fn execute(&self, project: &dyn Project) -> Result<String, StageError>;
}

/// Runs the project's tests, or passes immediately if it has none.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestStage;

impl Stage for TestStage {
    fn name(&self) -> &str {
        "test"
    }

    fn kind(&self) -> StageKind {
        StageKind::Test
    }

    fn execute(&self, project: &dyn Project) -> Result<String, StageError> {
        if !project.has_tests() {
            return Ok("No tests".to_string());
        }
        if is_successful(&project.run_tests()) {
            Ok("Tests passed".to_string())
        } else {
            Err(StageError::TestsFailed)
        }
    }
}

/// Deploys the project. Never skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeployStage;

impl Stage for DeployStage {
    fn name(&self) -> &str {
        "deploy"
    }

    fn kind(&self) -> StageKind {
        StageKind::Deploy
    }

    fn execute(&self, project: &dyn Project) -> Result<String, StageError> {
        if is_successful(&project.deploy()) {
            Ok("Deployment successful".to_string())
        } else {
            Err(StageError::DeploymentFailed)
        }
    }
}

/// The fixed stage order: test, then deploy.
#[must_use]
pub fn default_stages() -> Vec<Arc<dyn Stage>> {
    vec![Arc::new(TestStage), Arc::new(DeployStage)]
}

/// A simple function-based stage.
pub struct FnStage<F>
where
    F: Fn(&dyn Project) -> Result<String, StageError> + Send + Sync,
{
    name: String,
    kind: StageKind,
    func: F,
}

impl<F> FnStage<F>
where
    F: Fn(&dyn Project) -> Result<String, StageError> + Send + Sync,
{
    /// Creates a new function-based stage.
    pub fn new(name: impl Into<String>, kind: StageKind, func: F) -> Self {
        Self {
            name: name.into(),
            kind,
            func,
        }
    }
}

impl<F> Debug for FnStage<F>
where
    F: Fn(&dyn Project) -> Result<String, StageError> + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStage")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<F> Stage for FnStage<F>
where
    F: Fn(&dyn Project) -> Result<String, StageError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> StageKind {
        self.kind
    }

    fn execute(&self, project: &dyn Project) -> Result<String, StageError> {
        (self.func)(project)
    }
}
