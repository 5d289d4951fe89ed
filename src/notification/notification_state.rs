//! Notice state management
//!
//! Holds at most one notice. Showing a new notice replaces the old one and
//! restarts the expiry window.

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// How long a notice stays visible
pub const NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Notice kind - determines style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn style(self) -> NoticeStyle {
        let colors = match self {
            NoticeKind::Success => theme::notification::SUCCESS,
            NoticeKind::Error => theme::notification::ERROR,
        };
        NoticeStyle {
            fg: colors.fg,
            bg: colors.bg,
            border: colors.border,
        }
    }
}

/// Style configuration for a notice
#[derive(Debug, Clone)]
pub struct NoticeStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single notice with text, timing, and style
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub style: NoticeStyle,
    pub created_at: Instant,
}

impl Notice {
    pub fn new(text: &str, kind: NoticeKind) -> Self {
        Self::shown_at(text, kind, Instant::now())
    }

    pub fn shown_at(text: &str, kind: NoticeKind, created_at: Instant) -> Self {
        Self {
            text: text.to_string(),
            kind,
            style: kind.style(),
            created_at,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= NOTICE_DURATION
    }
}

/// Notification state manager for the application
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notice>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: &str, kind: NoticeKind) {
        #[cfg(debug_assertions)]
        log::debug!("Notice ({:?}): {}", kind, text);

        self.current = Some(Notice::new(text, kind));
    }

    pub fn show_success(&mut self, text: &str) {
        self.show(text, NoticeKind::Success);
    }

    pub fn show_error(&mut self, text: &str) {
        self.show(text, NoticeKind::Error);
    }

    /// Replace the current notice with one that was shown at `created_at`
    pub fn show_at(&mut self, text: &str, kind: NoticeKind, created_at: Instant) {
        self.current = Some(Notice::shown_at(text, kind, created_at));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear expired notice, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        self.clear_if_expired_at(Instant::now())
    }

    pub fn clear_if_expired_at(&mut self, now: Instant) -> bool {
        if let Some(ref notice) = self.current
            && notice.is_expired_at(now)
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn current_text(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.text.as_str())
    }

    pub fn current_kind(&self) -> Option<NoticeKind> {
        self.current.as_ref().map(|n| n.kind)
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
