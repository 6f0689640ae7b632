//! Scripted and recording collaborators for testing.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::stages::ports::{Emailer, Logger, NotificationConfig, Project, SUCCESS};

/// A project with scripted outcomes that counts how often it is driven.
#[derive(Debug)]
pub struct StubProject {
    has_tests: bool,
    test_outcome: String,
    deploy_outcome: String,
    test_calls: AtomicUsize,
    deploy_calls: AtomicUsize,
}

impl Default for StubProject {
    fn default() -> Self {
        Self::new()
    }
}

impl StubProject {
    /// Creates a project with no tests whose deployment succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self {
            has_tests: false,
            test_outcome: SUCCESS.to_string(),
            deploy_outcome: SUCCESS.to_string(),
            test_calls: AtomicUsize::new(0),
            deploy_calls: AtomicUsize::new(0),
        }
    }

    /// Declares tests that report the given outcome.
    #[must_use]
    pub fn with_tests(mut self, outcome: impl Into<String>) -> Self {
        self.has_tests = true;
        self.test_outcome = outcome.into();
        self
    }

    /// Sets the deployment outcome.
    #[must_use]
    pub fn with_deploy_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.deploy_outcome = outcome.into();
        self
    }

    /// Returns how many times `run_tests` was called.
    #[must_use]
    pub fn test_calls(&self) -> usize {
        self.test_calls.load(Ordering::SeqCst)
    }

    /// Returns how many times `deploy` was called.
    #[must_use]
    pub fn deploy_calls(&self) -> usize {
        self.deploy_calls.load(Ordering::SeqCst)
    }

    /// Resets the call counters.
    pub fn reset(&self) {
        self.test_calls.store(0, Ordering::SeqCst);
        self.deploy_calls.store(0, Ordering::SeqCst);
    }
}

impl Project for StubProject {
    fn has_tests(&self) -> bool {
        self.has_tests
    }

    fn run_tests(&self) -> String {
        self.test_calls.fetch_add(1, Ordering::SeqCst);
        self.test_outcome.clone()
    }

    fn deploy(&self) -> String {
        self.deploy_calls.fetch_add(1, Ordering::SeqCst);
        self.deploy_outcome.clone()
    }
}

/// Severity of a recorded log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// Logged through [`Logger::info`].
    Info,
    /// Logged through [`Logger::error`].
    Error,
}

/// A recorded log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Severity.
    pub level: LogLevel,
    /// Message text.
    pub message: String,
}

impl LogEntry {
    /// Creates an info entry.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            message: message.into(),
        }
    }

    /// Creates an error entry.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Error,
            message: message.into(),
        }
    }
}

/// A logger that keeps every line in order.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    /// Creates an empty recording logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Returns the recorded messages, regardless of level.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.entries.lock().iter().map(|e| e.message.clone()).collect()
    }

    /// Returns the messages logged at error level.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Clears recorded entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Logger for RecordingLogger {
    fn info(&self, message: &str) {
        self.entries.lock().push(LogEntry::info(message));
    }

    fn error(&self, message: &str) {
        self.entries.lock().push(LogEntry::error(message));
    }
}

/// An emailer that keeps every sent message.
#[derive(Debug, Default)]
pub struct RecordingEmailer {
    sent: Mutex<Vec<String>>,
}

impl RecordingEmailer {
    /// Creates an empty recording emailer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all sent messages.
    #[must_use]
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    /// Returns the number of sent messages.
    #[must_use]
    pub fn send_count(&self) -> usize {
        self.sent.lock().len()
    }
}

impl Emailer for RecordingEmailer {
    fn send(&self, message: &str) {
        self.sent.lock().push(message.to_string());
    }
}

/// A fixed notification setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaticConfig(pub bool);

impl StaticConfig {
    /// Email summaries enabled.
    #[must_use]
    pub fn enabled() -> Self {
        Self(true)
    }

    /// Email summaries disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self(false)
    }
}

impl NotificationConfig for StaticConfig {
    fn send_email_summary(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_project_defaults() {
        let project = StubProject::new();
        assert!(!project.has_tests());
        assert_eq!(project.deploy(), "success");
        assert_eq!(project.deploy_calls(), 1);
        assert_eq!(project.test_calls(), 0);
    }

    #[test]
    fn test_stub_project_scripted() {
        let project = StubProject::new()
            .with_tests("failure")
            .with_deploy_outcome("timeout");

        assert!(project.has_tests());
        assert_eq!(project.run_tests(), "failure");
        assert_eq!(project.deploy(), "timeout");
        assert_eq!(project.test_calls(), 1);

        project.reset();
        assert_eq!(project.test_calls(), 0);
        assert_eq!(project.deploy_calls(), 0);
    }

    #[test]
    fn test_recording_logger() {
        let logger = RecordingLogger::new();
        logger.info("Tests passed");
        logger.error("Deployment failed");

        assert_eq!(
            logger.entries(),
            vec![LogEntry::info("Tests passed"), LogEntry::error("Deployment failed")]
        );
        assert_eq!(logger.errors(), vec!["Deployment failed".to_string()]);

        logger.clear();
        assert!(logger.messages().is_empty());
    }

    #[test]
    fn test_recording_emailer() {
        let emailer = RecordingEmailer::new();
        emailer.send("Deployment successful");

        assert_eq!(emailer.send_count(), 1);
        assert_eq!(emailer.sent(), vec!["Deployment successful".to_string()]);
    }

    #[test]
    fn test_static_config() {
        assert!(StaticConfig::enabled().send_email_summary());
        assert!(!StaticConfig::disabled().send_email_summary());
        assert_eq!(StaticConfig::default(), StaticConfig::disabled());
    }
}
