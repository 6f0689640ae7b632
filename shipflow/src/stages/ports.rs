//! Collaborator ports consumed by the pipeline.
//!
//! The pipeline never runs tests, deploys or sends mail itself; it drives
//! these traits. Implementations must be `Send + Sync` so that independent
//! runs can share them across threads.

/// The outcome string a collaborator returns when an action succeeded.
///
/// Anything else, including an empty string or a differently cased
/// `"SUCCESS"`, is a failure.
pub const SUCCESS: &str = "success";

/// Returns true if a collaborator outcome equals the success sentinel.
#[must_use]
pub fn is_successful(outcome: &str) -> bool {
    outcome == SUCCESS
}

/// The unit under test and deployment.
#[cfg_attr(test, mockall::automock)]
pub trait Project: Send + Sync {
    /// Whether the project declares any tests.
    fn has_tests(&self) -> bool;

    /// Runs the test suite and returns an outcome string.
    fn run_tests(&self) -> String;

    /// Deploys the project and returns an outcome string.
    fn deploy(&self) -> String;
}

/// Line-oriented logger used for stage and notification outcomes.
#[cfg_attr(test, mockall::automock)]
pub trait Logger: Send + Sync {
    /// Logs an informational message.
    fn info(&self, message: &str);

    /// Logs an error message.
    fn error(&self, message: &str);
}

/// Delivers the run summary.
#[cfg_attr(test, mockall::automock)]
pub trait Emailer: Send + Sync {
    /// Sends a summary message.
    fn send(&self, message: &str);
}

/// Read-only notification settings.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationConfig: Send + Sync {
    /// Whether a summary email should be sent after each run.
    fn send_email_summary(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_sentinel_is_exact() {
        assert!(is_successful("success"));
        assert!(!is_successful("SUCCESS"));
        assert!(!is_successful("success "));
        assert!(!is_successful(""));
        assert!(!is_successful("failure"));
    }
}
