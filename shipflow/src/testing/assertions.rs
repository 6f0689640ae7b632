//! Test assertions for recorded collaborators.

use super::mocks::{LogEntry, RecordingEmailer, RecordingLogger};

/// Asserts that the logger recorded exactly these entries, in order.
pub fn assert_logged(logger: &RecordingLogger, expected: &[LogEntry]) {
    let actual = logger.entries();
    assert_eq!(
        actual, expected,
        "Expected log entries {expected:?}, got {actual:?}"
    );
}

/// Asserts that the logger recorded exactly these messages, in order,
/// regardless of level.
pub fn assert_log_messages(logger: &RecordingLogger, expected: &[&str]) {
    let actual = logger.messages();
    assert_eq!(
        actual, expected,
        "Expected log messages {expected:?}, got {actual:?}"
    );
}

/// Asserts that exactly one email was sent, with the given body.
pub fn assert_email_sent(emailer: &RecordingEmailer, expected: &str) {
    let sent = emailer.sent();
    assert_eq!(
        sent.len(),
        1,
        "Expected exactly one email, got {}: {sent:?}",
        sent.len()
    );
    assert_eq!(
        sent[0], expected,
        "Expected email '{expected}', got '{}'",
        sent[0]
    );
}

/// Asserts that no email was sent.
pub fn assert_no_email(emailer: &RecordingEmailer) {
    let sent = emailer.sent();
    assert!(sent.is_empty(), "Expected no email, got {sent:?}");
}
