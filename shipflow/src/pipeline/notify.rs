//! Config-gated summary notification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::stages::ports::{Emailer, Logger, NotificationConfig};

/// What the dispatcher did with the terminal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationDecision {
    /// The message was handed to the emailer.
    Sent,
    /// Email summaries are disabled; nothing was sent.
    Suppressed,
}

impl fmt::Display for NotificationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sent => write!(f, "sent"),
            Self::Suppressed => write!(f, "suppressed"),
        }
    }
}

/// Sends the terminal message when email summaries are enabled.
#[derive(Clone)]
pub struct NotificationDispatcher {
    config: Arc<dyn NotificationConfig>,
    emailer: Arc<dyn Emailer>,
}

impl fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationDispatcher").finish_non_exhaustive()
    }
}

impl NotificationDispatcher {
    /// Creates a dispatcher.
    #[must_use]
    pub fn new(config: Arc<dyn NotificationConfig>, emailer: Arc<dyn Emailer>) -> Self {
        Self { config, emailer }
    }

    /// Sends or suppresses `message`, logging which one happened.
    ///
    /// Emailer failures are the emailer's concern and are not observed here.
    pub fn dispatch(&self, message: &str, logger: &dyn Logger) -> NotificationDecision {
        if self.config.send_email_summary() {
            logger.info("Sending email");
            self.emailer.send(message);
            NotificationDecision::Sent
        } else {
            logger.info("Email disabled");
            NotificationDecision::Suppressed
        }
    }
}
