//! Transient user-facing notifications.
//!
//! A [`Notifier`] holds a short queue of messages that expire on their own.
//! The host calls [`Notifier::expire`] on every refresh tick and renders
//! whatever is still [`visible`](Notifier::visible).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::trace;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A mutation went through.
    Success,
    /// Something the user should notice, such as going idle.
    Warning,
    /// A rejected action.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "ok"),
            Self::Warning => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One queued message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Queue-unique id.
    pub id: u64,
    /// Message severity.
    pub severity: Severity,
    /// Text shown to the user.
    pub message: String,
    /// When the message disappears.
    pub expires_at: Instant,
}

/// Lifetime and capacity settings for a [`Notifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifierSettings {
    /// Default lifetime of a message.
    pub auto_close: Duration,
    /// Maximum number of messages kept; the oldest is dropped beyond this.
    pub max_visible: usize,
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self {
            auto_close: Duration::from_millis(3000),
            max_visible: 5,
        }
    }
}

/// Queue of auto-dismissing notifications.
#[derive(Debug, Default)]
pub struct Notifier {
    settings: NotifierSettings,
    items: VecDeque<Notification>,
    next_id: u64,
}

impl Notifier {
    /// Create an empty queue.
    #[must_use]
    pub fn new(settings: NotifierSettings) -> Self {
        Self {
            settings,
            items: VecDeque::new(),
            next_id: 0,
        }
    }

    /// Queue a message with the default lifetime.
    pub fn push(&mut self, severity: Severity, message: impl Into<String>, now: Instant) -> u64 {
        self.push_for(severity, message, self.settings.auto_close, now)
    }

    /// Queue a message that lives for `lifetime`.
    pub fn push_for(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        lifetime: Duration,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        while self.items.len() >= self.settings.max_visible.max(1) {
            self.items.pop_front();
        }
        self.items.push_back(Notification {
            id,
            severity,
            message: message.into(),
            expires_at: now + lifetime,
        });
        id
    }

    /// Drop expired messages. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.expires_at > now);
        let removed = before - self.items.len();
        if removed > 0 {
            trace!(removed, "notifications expired");
        }
        removed
    }

    /// Remove a message before it expires.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Current messages, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter().rev()
    }

    /// Number of queued messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(notifier: &Notifier) -> Vec<&str> {
        notifier.visible().map(|n| n.message.as_str()).collect()
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Success.to_string(), "ok");
        assert_eq!(Severity::Warning.to_string(), "warn");
        assert_eq!(Severity::Error.to_string(), "error");
    }

    #[test]
    fn test_newest_first() {
        let now = Instant::now();
        let mut notifier = Notifier::new(NotifierSettings::default());

        notifier.push(Severity::Success, "first", now);
        notifier.push(Severity::Error, "second", now);

        assert_eq!(messages(&notifier), vec!["second", "first"]);
    }

    #[test]
    fn test_expire_after_auto_close() {
        let now = Instant::now();
        let mut notifier = Notifier::new(NotifierSettings::default());
        notifier.push(Severity::Success, "saved", now);

        assert_eq!(notifier.expire(now + Duration::from_millis(2999)), 0);
        assert_eq!(notifier.len(), 1);
        assert_eq!(notifier.expire(now + Duration::from_millis(3000)), 1);
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_custom_lifetime() {
        let now = Instant::now();
        let mut notifier = Notifier::new(NotifierSettings::default());
        notifier.push_for(Severity::Warning, "idle", Duration::from_secs(5), now);
        notifier.push(Severity::Success, "saved", now);

        notifier.expire(now + Duration::from_secs(4));
        assert_eq!(messages(&notifier), vec!["idle"]);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let now = Instant::now();
        let mut notifier = Notifier::new(NotifierSettings {
            auto_close: Duration::from_secs(3),
            max_visible: 2,
        });

        notifier.push(Severity::Success, "a", now);
        notifier.push(Severity::Success, "b", now);
        notifier.push(Severity::Success, "c", now);

        assert_eq!(messages(&notifier), vec!["c", "b"]);
    }

    #[test]
    fn test_dismiss() {
        let now = Instant::now();
        let mut notifier = Notifier::default();
        let id = notifier.push(Severity::Error, "nope", now);

        assert!(notifier.dismiss(id));
        assert!(!notifier.dismiss(id));
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let now = Instant::now();
        let mut notifier = Notifier::new(NotifierSettings::default());
        let a = notifier.push(Severity::Success, "a", now);
        let b = notifier.push(Severity::Success, "b", now);
        assert_ne!(a, b);
    }
}
