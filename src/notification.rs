//! Notification module for bloglist
//!
//! Provides a single-slot notice that displays a transient success or error
//! message and clears itself after a fixed delay.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{NOTICE_DURATION, Notice, NoticeKind, NotificationState};
