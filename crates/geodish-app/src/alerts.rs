//! Transient notification stack
//!
//! Alerts are pushed by the update handlers and expire on their own after
//! a fixed lifetime; the tick handler prunes them. Timestamps are passed
//! in explicitly so expiry is testable without sleeping.

use std::time::{Duration, Instant};

/// How long an alert stays visible.
pub const ALERT_TTL: Duration = Duration::from_secs(5);

/// How many alerts are rendered at once (newest first).
pub const MAX_VISIBLE_ALERTS: usize = 4;

/// Visual weight of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Info,
    Success,
    Warning,
    Danger,
}

/// A single transient notification
#[derive(Debug, Clone)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub text: String,
    pub created_at: Instant,
}

impl Alert {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= ALERT_TTL
    }
}

/// Stack of live alerts, oldest first
#[derive(Debug, Default)]
pub struct AlertStack {
    alerts: Vec<Alert>,
}

impl AlertStack {
    pub fn push(&mut self, severity: AlertSeverity, text: impl Into<String>) {
        self.push_at(severity, text, Instant::now());
    }

    pub fn push_at(&mut self, severity: AlertSeverity, text: impl Into<String>, now: Instant) {
        self.alerts.push(Alert {
            severity,
            text: text.into(),
            created_at: now,
        });
    }

    /// Drop expired alerts. Called on every tick.
    pub fn prune(&mut self, now: Instant) {
        self.alerts.retain(|a| !a.is_expired(now));
    }

    /// Manually dismiss the newest alert, if any.
    pub fn dismiss_newest(&mut self) {
        self.alerts.pop();
    }

    /// The alerts to render, newest first, capped at [`MAX_VISIBLE_ALERTS`].
    pub fn visible(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().rev().take(MAX_VISIBLE_ALERTS)
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    // Convenience push helpers used throughout the handlers

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(AlertSeverity::Info, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(AlertSeverity::Success, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(AlertSeverity::Warning, text);
    }

    pub fn danger(&mut self, text: impl Into<String>) {
        self.push(AlertSeverity::Danger, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_expires_after_ttl() {
        let start = Instant::now();
        let mut stack = AlertStack::default();
        stack.push_at(AlertSeverity::Info, "hello", start);

        stack.prune(start + Duration::from_secs(4));
        assert_eq!(stack.len(), 1);

        stack.prune(start + ALERT_TTL);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_alerts_stack_and_expire_independently() {
        let start = Instant::now();
        let mut stack = AlertStack::default();
        stack.push_at(AlertSeverity::Info, "first", start);
        stack.push_at(AlertSeverity::Success, "second", start + Duration::from_secs(3));

        stack.prune(start + Duration::from_secs(6));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.visible().next().map(|a| a.text.as_str()), Some("second"));
    }

    #[test]
    fn test_visible_is_newest_first_and_capped() {
        let start = Instant::now();
        let mut stack = AlertStack::default();
        for i in 0..6 {
            stack.push_at(AlertSeverity::Info, format!("alert {i}"), start);
        }

        let visible: Vec<&str> = stack.visible().map(|a| a.text.as_str()).collect();
        assert_eq!(visible.len(), MAX_VISIBLE_ALERTS);
        assert_eq!(visible[0], "alert 5");
    }

    #[test]
    fn test_dismiss_newest_removes_last_pushed() {
        let mut stack = AlertStack::default();
        stack.info("old");
        stack.danger("new");

        stack.dismiss_newest();
        assert_eq!(stack.visible().next().map(|a| a.text.as_str()), Some("old"));

        stack.dismiss_newest();
        stack.dismiss_newest(); // empty stack is fine
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_does_not_clear_prior_alerts() {
        let mut stack = AlertStack::default();
        stack.danger("boom");
        stack.success("saved");
        assert_eq!(stack.len(), 2);
    }
}
