//! # Notifications
//!
//! Every store operation reports its outcome as a transient, leveled message
//! (the toast of a graphical UI). Delivery is fire-and-forget: no operation
//! depends on a notification being shown.
//!
//! [`NotificationCenter`] is the stock sink. It keeps notifications stacked in
//! arrival order, each expiring after a fixed time-to-live, and hands each one
//! to a renderer exactly once through [`NotificationCenter::take_unseen`].

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// How long a notification stays visible unless configured otherwise.
pub const DEFAULT_TTL_MS: u64 = 3000;

/// Longer lifetimes are clamped to a day.
const MAX_TTL_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: MessageLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

pub trait NotificationSink {
    fn notify(&mut self, level: MessageLevel, message: &str);

    fn info(&mut self, message: &str) {
        self.notify(MessageLevel::Info, message);
    }

    fn success(&mut self, message: &str) {
        self.notify(MessageLevel::Success, message);
    }

    fn warning(&mut self, message: &str) {
        self.notify(MessageLevel::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.notify(MessageLevel::Error, message);
    }
}

#[derive(Debug)]
pub struct NotificationCenter {
    ttl: Duration,
    stack: Vec<Notification>,
    unseen: usize,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::with_ttl_ms(DEFAULT_TTL_MS)
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl_ms(ttl_ms: u64) -> Self {
        Self {
            ttl: Duration::milliseconds(ttl_ms.min(MAX_TTL_MS) as i64),
            stack: Vec::new(),
            unseen: 0,
        }
    }

    /// Every notification still held, expired or not, oldest first.
    pub fn all(&self) -> &[Notification] {
        &self.stack
    }

    /// Notifications visible at `now`, oldest first.
    pub fn active_at(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Notification> + '_ {
        self.stack.iter().filter(move |n| n.is_active_at(now))
    }

    pub fn dismiss_expired(&mut self, now: DateTime<Utc>) {
        let before = self.stack.len();
        let first_unseen = before - self.unseen;
        let mut index = 0;
        let mut unseen_dropped = 0;
        self.stack.retain(|n| {
            let keep = n.is_active_at(now);
            if !keep && index >= first_unseen {
                unseen_dropped += 1;
            }
            index += 1;
            keep
        });
        self.unseen -= unseen_dropped;
    }

    /// Notifications that arrived since the last call.
    pub fn take_unseen(&mut self) -> Vec<Notification> {
        let start = self.stack.len() - self.unseen;
        self.unseen = 0;
        self.stack[start..].to_vec()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.unseen = 0;
    }
}

impl NotificationSink for NotificationCenter {
    fn notify(&mut self, level: MessageLevel, message: &str) {
        let now = Utc::now();
        self.stack.push(Notification {
            level,
            message: message.to_string(),
            created_at: now,
            expires_at: now + self.ttl,
        });
        self.unseen += 1;
    }
}
