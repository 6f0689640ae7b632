//! Testing utilities for shipflow pipelines.
//!
//! This module provides:
//! - Scripted projects and recording collaborators
//! - Assertions over recorded logs and emails

mod assertions;
mod mocks;

pub use assertions::{
    assert_email_sent, assert_log_messages, assert_logged, assert_no_email,
};
pub use mocks::{
    LogEntry, LogLevel, RecordingEmailer, RecordingLogger, StaticConfig, StubProject,
};
