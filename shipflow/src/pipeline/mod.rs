//! Pipeline building and execution.
//!
//! This module provides:
//! - The stage runner (sequential, short-circuit on first failure)
//! - The notification dispatcher
//! - The pipeline composition root and its builder

mod builder;
mod executor;
mod notify;
mod runner;

#[cfg(test)]
mod integration_tests;

pub use builder::PipelineBuilder;
pub use executor::{Pipeline, RunReport};
pub use notify::{NotificationDecision, NotificationDispatcher};
pub use runner::{RunOutcome, StageRunner};
