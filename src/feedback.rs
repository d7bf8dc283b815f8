//! Transient acknowledgments shown to the user ("toasts").
//!
//! Success and failure travel the same channel; only the newest notice is
//! kept, and it expires after a fixed time on screen.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub shown_at: Instant,
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        self.kind == NoticeKind::Failure
    }
}

#[derive(Debug)]
pub struct Feedback {
    current: Option<Notice>,
    ttl: Duration,
}

impl Feedback {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    pub fn success<S: Into<String>>(&mut self, message: S) {
        self.show(message.into(), NoticeKind::Success);
    }

    pub fn failure<S: Into<String>>(&mut self, message: S) {
        self.show(message.into(), NoticeKind::Failure);
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Clear the notice once it has been visible for the full ttl.
    /// Returns true when a notice was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= self.ttl);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    fn show(&mut self, message: String, kind: NoticeKind) {
        self.current = Some(Notice {
            message,
            kind,
            shown_at: Instant::now(),
        });
    }
}
