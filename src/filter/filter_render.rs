use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Borders},
};

use super::FilterState;
use crate::theme;

pub fn render_filter(filter: &FilterState, frame: &mut Frame, area: Rect, focused: bool) {
    let border_color = if focused {
        theme::filter::BORDER_FOCUSED
    } else {
        theme::filter::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" filter ")
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(filter.textarea(), inner);
}
