//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use swatchbook::services::Level;
use swatchbook::{Outcome, Session};

/// Assert the working palette, compared as uppercase hex strings
pub fn assert_palette(session: &Session, expected: &[&str]) {
    let actual: Vec<String> = session.palette().iter().map(|c| c.to_hex()).collect();
    let expected: Vec<String> = expected.iter().map(|s| s.to_uppercase()).collect();
    assert_eq!(actual, expected, "Unexpected working palette");
}

/// Assert the active notification level and message
pub fn assert_notification(session: &Session, level: Level, message: &str) {
    let active = session
        .notifier()
        .active()
        .unwrap_or_else(|| panic!("Expected a notification: {message}"));
    assert_eq!(active.level, level);
    assert_eq!(active.message, message);
}

/// Assert a command succeeded and return its message
pub fn assert_done(outcome: Outcome) -> String {
    match outcome {
        Outcome::Done(message) => message,
        other => panic!("Expected success, got {other:?}"),
    }
}

/// Assert a command was rejected and return its message
pub fn assert_failed(outcome: Outcome) -> String {
    match outcome {
        Outcome::Failed(message) => message,
        other => panic!("Expected failure, got {other:?}"),
    }
}
