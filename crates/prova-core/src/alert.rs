//! Single-slot user notification channel.
//!
//! The application surfaces every asynchronous outcome (failed sign-in,
//! rejected test creation, network trouble) through one process-wide slot.
//! At most one alert is live at a time; the last write wins and an alert
//! persists until explicitly replaced or cleared.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Error,
    Success,
}

/// A single transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub text: String,
}

impl Alert {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            text: text.into(),
        }
    }
}

/// Holds at most one pending alert.
///
/// Any caller may overwrite the slot; there is no auto-expiry. Callers that
/// start a fresh action (e.g., a new submission attempt) clear the slot first
/// so stale errors do not bleed into unrelated outcomes.
#[derive(Debug, Default)]
pub struct AlertChannel {
    current: Option<Alert>,
}

impl AlertChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending alert. `None` clears the slot.
    pub fn publish(&mut self, alert: Option<Alert>) {
        self.current = alert;
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    /// Remove and return the pending alert, leaving the slot empty.
    pub fn take(&mut self) -> Option<Alert> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_channel_renders_nothing() {
        let channel = AlertChannel::new();
        assert_eq!(channel.current(), None);
    }

    #[test]
    fn last_write_wins() {
        let mut channel = AlertChannel::new();
        channel.publish(Some(Alert::error("first")));
        channel.publish(Some(Alert::success("second")));
        assert_eq!(channel.current(), Some(&Alert::success("second")));
    }

    #[test]
    fn publishing_twice_is_idempotent() {
        let mut channel = AlertChannel::new();
        channel.publish(Some(Alert::error("same")));
        let after_once = channel.current().cloned();
        channel.publish(Some(Alert::error("same")));
        assert_eq!(channel.current().cloned(), after_once);
    }

    #[test]
    fn publish_none_clears() {
        let mut channel = AlertChannel::new();
        channel.publish(Some(Alert::error("oops")));
        channel.publish(None);
        assert_eq!(channel.current(), None);
    }

    #[test]
    fn take_drains_the_slot() {
        let mut channel = AlertChannel::new();
        channel.publish(Some(Alert::success("done")));
        assert_eq!(channel.take(), Some(Alert::success("done")));
        assert_eq!(channel.current(), None);
    }
}
