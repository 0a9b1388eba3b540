//! Decode notifications.
//!
//! Observations that do not invalidate a blob (trailing bytes, empty paths,
//! gradients without stops) are collected as [`Notification`] items next to
//! the decoded tables instead of being dropped. Each one is also forwarded
//! to the `log` facade at `warn` level.

use std::fmt;

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Feature exists but has no effect in this context.
    NotSupported,
    /// Suspicious but valid content.
    Warning,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
        }
    }
}

/// A single notification produced while decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub message: String,
    /// Byte offset in the blob the observation refers to, when known.
    pub offset: Option<usize>,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            message: message.into(),
            offset: None,
        }
    }

    /// Attach a blob offset.
    pub fn at(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            Some(offset) => write!(
                f,
                "[{}] {} (offset {})",
                self.notification_type, self.message, offset
            ),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Collects notifications during a decode.
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification and log it.
    pub fn push(&mut self, notification: Notification) {
        log::warn!("{}", notification);
        self.items.push(notification);
    }

    /// Record a notification tied to a blob offset.
    pub fn notify_at(
        &mut self,
        notification_type: NotificationType,
        offset: usize,
        message: impl Into<String>,
    ) {
        self.push(Notification::new(notification_type, message).at(offset));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Move every notification of `other` into this collection.
    pub fn extend(&mut self, other: NotificationCollection) {
        self.items.extend(other.items);
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
