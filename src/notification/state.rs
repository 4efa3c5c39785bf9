//! Notification state management
//!
//! Transient status messages shown over the UI: copy and export
//! confirmations, persistence warnings.

use std::time::{Duration, Instant};

use ratatui::style::Color;

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Confirmations like "Copied translation!" - short-lived
    #[default]
    Info,
    /// Warnings like a failed history save - longer-lived
    Warning,
    /// Critical errors - stay until replaced
    Error,
}

impl NotificationType {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationType::Info => Some(Duration::from_millis(2000)),
            NotificationType::Warning => Some(Duration::from_secs(8)),
            NotificationType::Error => None, // Permanent
        }
    }

    pub fn colors(self) -> (Color, Color) {
        match self {
            NotificationType::Info => (Color::White, Color::DarkGray),
            NotificationType::Warning => (Color::Black, Color::Yellow),
            NotificationType::Error => (Color::White, Color::Red),
        }
    }
}

/// A single notification with message, timing, and type
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    duration: Option<Duration>,
}

impl Notification {
    fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            notification_type,
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    /// Check if the notification has outlived its duration
    pub fn is_expired(&self) -> bool {
        match self.duration {
            Some(d) => self.created_at.elapsed() > d,
            None => false,
        }
    }
}

/// Notification state manager; only the most recent notification is shown.
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a short-lived info notification
    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Info));
    }

    /// Show a warning notification
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Warning));
    }

    /// Show an error notification that stays until replaced
    pub fn show_error(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Error));
    }

    /// Clear an expired notification, returns true if one was cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notification) = self.current
            && notification.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
