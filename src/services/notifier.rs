use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => f.write_str("info"),
            Level::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: Level,
    pub message: String,
    pub deadline: Instant,
}

/// Holds at most one transient notification.
///
/// A new notification replaces the active one and restarts the dismiss
/// timer, so a burst of actions only shows the latest message.
#[derive(Debug)]
pub struct Notifier {
    timeout: Duration,
    active: Option<Notification>,
}

impl Notifier {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            active: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn notify(&mut self, level: Level, message: impl Into<String>) {
        self.notify_at(level, message, Instant::now());
    }

    /// Like [`notify`](Self::notify), with the clock supplied by the caller
    pub fn notify_at(&mut self, level: Level, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!(%level, %message, "Notification");
        self.active = Some(Notification {
            level,
            message,
            deadline: now + self.timeout,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(Level::Info, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(Level::Error, message);
    }

    pub fn active(&self) -> Option<&Notification> {
        self.active.as_ref()
    }

    /// When the active notification should be dismissed
    pub fn deadline(&self) -> Option<Instant> {
        self.active.as_ref().map(|n| n.deadline)
    }

    /// Dismiss the active notification if its deadline has passed,
    /// returning it
    pub fn dismiss_expired(&mut self, now: Instant) -> Option<Notification> {
        if self.deadline().is_some_and(|deadline| deadline <= now) {
            self.active.take()
        } else {
            None
        }
    }
}
