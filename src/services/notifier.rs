//! User-visible notifications.
//!
//! The orchestrator reports outcomes through [`Notifier`]. The production
//! [`NotificationFeed`] logs each notification and keeps the most recent ones
//! until a client drains them.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn info(title: &str, description: &str) -> Self {
        Self::new(title, description, Severity::Default)
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self::new(title, description, Severity::Destructive)
    }

    fn new(title: &str, description: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            severity,
            created_at: Utc::now(),
        }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Bounded buffer of pending notifications; the oldest is dropped when full.
#[derive(Debug)]
pub struct NotificationFeed {
    capacity: usize,
    pending: Mutex<VecDeque<Notification>>,
}

impl NotificationFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            pending: Mutex::new(VecDeque::new()),
        }
    }

    /// Remove and return every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        match self.pending.lock() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }
}

impl Notifier for NotificationFeed {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Default => tracing::info!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
            Severity::Destructive => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "Error notification"
            ),
        }

        let mut pending = match self.pending.lock() {
            Ok(pending) => pending,
            Err(poisoned) => poisoned.into_inner(),
        };
        if pending.len() == self.capacity {
            pending.pop_front();
        }
        pending.push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_feed() {
        let feed = NotificationFeed::new(4);
        feed.notify(Notification::info("Business Added", "created"));
        feed.notify(Notification::error("Error", "failed"));

        let drained = feed.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].title, "Business Added");
        assert_eq!(drained[1].severity, Severity::Destructive);
        assert!(feed.drain().is_empty());
    }

    #[test]
    fn oldest_notification_is_dropped_at_capacity() {
        let feed = NotificationFeed::new(2);
        feed.notify(Notification::info("one", ""));
        feed.notify(Notification::info("two", ""));
        feed.notify(Notification::info("three", ""));

        let titles: Vec<_> = feed.drain().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["two", "three"]);
    }
}
