//! Notice rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

/// Render the notice overlay in the top-right corner of the frame
///
/// Call after the main UI so the notice appears on top of other content.
/// Expired notices are cleared first and not drawn.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState) {
    notification.clear_if_expired();

    let Some(notice) = notification.current() else {
        return;
    };

    let style = &notice.style;

    let text = Line::from(Span::styled(
        format!(" {} ", notice.text),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    // padded message + 2 borders, measured in terminal cells
    let content_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let notification_height = 3;

    let frame_area = frame.area();
    let margin = 2;
    let width = content_width
        .saturating_add(2)
        .min(frame_area.width.saturating_sub(margin * 2));
    let notification_area = Rect {
        x: frame_area.width.saturating_sub(width + margin),
        y: margin,
        width,
        height: notification_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    if notification_area.width < 5 || notification_area.height < 3 {
        return;
    }

    popup::clear_area(frame, notification_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
}
