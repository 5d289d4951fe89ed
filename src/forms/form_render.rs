use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::form_fields::FormFields;
use crate::theme;
use crate::widgets::popup;

const FORM_WIDTH: u16 = 56;
const FIELD_HEIGHT: u16 = 3;
const HINTS_HEIGHT: u16 = 1;

pub fn render_form(fields: &FormFields, title: &str, frame: &mut Frame, area: Rect) {
    let height = fields.len() as u16 * FIELD_HEIGHT + HINTS_HEIGHT + 2;
    let popup_area = popup::centered_popup(area, FORM_WIDTH, height);
    popup::clear_area(frame, popup_area);

    let block = popup::modal_block(
        format!(" {} ", title),
        theme::form::BORDER,
        theme::form::BACKGROUND,
    );
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let mut constraints: Vec<Constraint> = (0..fields.len())
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(HINTS_HEIGHT));
    let rows = Layout::vertical(constraints).split(inner);

    for index in 0..fields.len() {
        render_field(fields, index, frame, rows[index]);
    }

    let hints = hint_line(&[("Tab", "next field"), ("Enter", "submit"), ("Esc", "cancel")]);
    frame.render_widget(Paragraph::new(hints), rows[fields.len()]);
}

fn render_field(fields: &FormFields, index: usize, frame: &mut Frame, area: Rect) {
    let border = if index == fields.active() {
        theme::form::FIELD_ACTIVE_BORDER
    } else {
        theme::form::FIELD_INACTIVE_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", fields.label(index)))
        .border_style(Style::default().fg(border))
        .style(Style::default().fg(theme::form::FIELD_TEXT));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(fields.textarea(index), inner);
}

/// Yes/no confirmation box
pub fn render_confirm(message: &str, frame: &mut Frame, area: Rect) {
    let message_width = u16::try_from(Line::from(message).width()).unwrap_or(u16::MAX);
    let width = message_width.saturating_add(6).max(30);
    let popup_area = popup::centered_popup(area, width, 5);
    popup::clear_area(frame, popup_area);

    let block = popup::modal_block(
        " confirm ",
        theme::form::DELETE_BORDER,
        theme::form::BACKGROUND,
    );

    let text = vec![
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(theme::form::FIELD_TEXT),
        )),
        hint_line(&[("y", "yes"), ("n", "no")]),
    ];
    frame.render_widget(Paragraph::new(text).block(block), popup_area);
}

pub fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default().fg(theme::hints::KEY),
        ));
        spans.push(Span::styled(
            format!("{} ", action),
            Style::default().fg(theme::hints::TEXT),
        ));
    }
    Line::from(spans)
}
