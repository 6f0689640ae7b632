//! # Shipflow
//!
//! A minimal build pipeline executor: run a project's tests, deploy it, and
//! send a summary of what happened.
//!
//! Shipflow provides:
//!
//! - **Sequential stages**: test, then deploy; the first failure stops the run
//! - **Failure recovery**: stage errors become the terminal message instead
//!   of propagating to the caller
//! - **Per-stage observability**: every outcome is logged, and each run
//!   produces a [`pipeline::RunReport`]
//! - **Config-gated notification**: exactly one send-or-suppress decision
//!   per run
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shipflow::prelude::*;
//! use std::sync::Arc;
//!
//! let config = PipelineConfig::from_env()?;
//! init_tracing(config.log_format);
//!
//! let pipeline = Pipeline::with_tracing(Arc::new(config), Arc::new(LoggingEmailer::new()));
//! let project = CommandProject::new("./deploy.sh").with_test_command("cargo test");
//!
//! pipeline.run(&project);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod errors;
pub mod observability;
pub mod pipeline;
pub mod project;
pub mod stages;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::PipelineConfig;
    pub use crate::core::{StageKind, StageRecord, StageStatus};
    pub use crate::errors::{ConfigError, ShipflowError, StageError};
    pub use crate::observability::{init_tracing, LogFormat, LoggingEmailer, TracingLogger};
    pub use crate::pipeline::{
        NotificationDecision, NotificationDispatcher, Pipeline, PipelineBuilder, RunOutcome,
        RunReport, StageRunner,
    };
    pub use crate::project::CommandProject;
    pub use crate::stages::ports::{Emailer, Logger, NotificationConfig, Project, SUCCESS};
    pub use crate::stages::{DeployStage, FnStage, Stage, TestStage};
}
