use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{App, Focus, Modal};
use crate::blogs::blog_render;
use crate::filter::render_filter;
use crate::forms::form_render::{self, hint_line};
use crate::notification::render_notification;
use crate::theme;

const LOGGED_IN_HINTS: &[(&str, &str)] = &[
    ("j/k", "move"),
    ("Enter", "details"),
    ("l", "like"),
    ("n", "new"),
    ("d", "remove"),
    ("/", "filter"),
    ("r", "refresh"),
    ("O", "log out"),
    ("q", "quit"),
];

const LOGGED_OUT_HINTS: &[(&str, &str)] = &[
    ("j/k", "move"),
    ("Enter", "details"),
    ("l", "like"),
    ("/", "filter"),
    ("r", "refresh"),
    ("L", "log in"),
    ("q", "quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_header(frame, layout[0]);
        render_filter(&self.filter, frame, layout[1], self.focus == Focus::Filter);
        blog_render::render_blog_list(
            &self.blogs,
            frame,
            layout[2],
            self.focus == Focus::BlogList && self.modal == Modal::None,
        );

        let hints = if self.session.is_logged_in() {
            LOGGED_IN_HINTS
        } else {
            LOGGED_OUT_HINTS
        };
        frame.render_widget(Paragraph::new(hint_line(hints)), layout[3]);

        self.render_modal(frame);

        // Notice goes last so it stays on top of any popup
        render_notification(frame, &mut self.notification);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(" blogs ", theme::header::TITLE)];

        match self.current_user_name() {
            Some(name) => spans.push(Span::styled(
                format!(" {} logged in", name),
                Style::default().fg(theme::header::USER),
            )),
            None => spans.push(Span::styled(
                " not logged in",
                Style::default().fg(theme::header::LOGGED_OUT),
            )),
        }

        if self.api.is_loading() {
            spans.push(Span::styled(
                "  loading...",
                Style::default().fg(theme::header::LOADING),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_modal(&self, frame: &mut Frame) {
        let area = frame.area();
        match &self.modal {
            Modal::None => {}
            Modal::Login => form_render::render_form(
                &self.login_form.fields,
                "log in to application",
                frame,
                area,
            ),
            Modal::NewBlog => {
                form_render::render_form(&self.blog_form.fields, "create new", frame, area)
            }
            Modal::ConfirmDelete { title, author, .. } => form_render::render_confirm(
                &format!("Remove blog {} by {}?", title, author),
                frame,
                area,
            ),
        }
    }
}
