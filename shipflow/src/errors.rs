//! Error types for the shipflow pipeline.
//!
//! Stage failures ([`StageError`]) never escape the stage runner: they are
//! recovered into the terminal message. [`ShipflowError`] covers everything
//! that can go wrong before a pipeline runs (configuration, construction).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// A failure reported by a pipeline stage.
///
/// Each variant corresponds to one stage kind and carries no payload; the
/// human-readable message is derived from the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageError {
    /// The project's test suite did not report success.
    #[error("Tests failed")]
    TestsFailed,

    /// The project's deployment did not report success.
    #[error("Deployment failed")]
    DeploymentFailed,
}

impl StageError {
    /// Returns the fixed message for this failure.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Errors raised while loading pipeline configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration document was not valid.
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        /// Path (or `<inline>`) of the document.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// An environment override held an unrecognised value.
    #[error("invalid value '{value}' for {var}: expected a boolean")]
    InvalidEnv {
        /// Variable name.
        var: String,
        /// Offending value.
        value: String,
    },
}

/// The main error type for shipflow operations.
#[derive(Debug, Error)]
pub enum ShipflowError {
    /// Configuration could not be loaded.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A pipeline was built without a required collaborator.
    #[error("pipeline is missing a required collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, ShipflowError>;
