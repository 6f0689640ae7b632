//! `tracing`-backed logger and emailer.

use crate::stages::ports::{Emailer, Logger};
use tracing::{error, info};

/// Target used for every pipeline outcome line.
pub const LOG_TARGET: &str = "shipflow";

/// A [`Logger`] that forwards to the tracing framework.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    /// Creates a new tracing logger.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: LOG_TARGET, "{message}");
    }

    fn error(&self, message: &str) {
        error!(target: LOG_TARGET, "{message}");
    }
}

/// An [`Emailer`] that records the summary as a tracing event instead of
/// transmitting it.
#[derive(Debug, Clone, Default)]
pub struct LoggingEmailer {
    recipient: Option<String>,
}

impl LoggingEmailer {
    /// Creates an emailer with no recipient.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the recipient reported alongside each summary.
    #[must_use]
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    /// Returns the configured recipient.
    #[must_use]
    pub fn recipient(&self) -> Option<&str> {
        self.recipient.as_deref()
    }
}

impl Emailer for LoggingEmailer {
    fn send(&self, message: &str) {
        info!(
            target: "shipflow::email",
            recipient = self.recipient.as_deref().unwrap_or("-"),
            summary = %message,
            "Email summary: {}", message
        );
    }
}
