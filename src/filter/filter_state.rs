use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{Input, TextArea};

use crate::theme;

fn create_filter_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea.set_placeholder_text("type to filter by title or author");
    textarea.set_placeholder_style(theme::filter::PLACEHOLDER);
    textarea
}

pub struct FilterState {
    textarea: TextArea<'static>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            textarea: create_filter_textarea(),
        }
    }

    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    /// Apply a key press. Returns the new filter text if it changed.
    pub fn input(&mut self, key: KeyEvent) -> Option<String> {
        if self.textarea.input(Input::from(key)) {
            Some(self.text().to_string())
        } else {
            None
        }
    }

    /// Insert pasted text. Returns the new filter text if it changed.
    pub fn paste(&mut self, text: &str) -> Option<String> {
        let single_line = text.replace(['\r', '\n'], "");
        if self.textarea.insert_str(single_line) {
            Some(self.text().to_string())
        } else {
            None
        }
    }

    pub fn clear(&mut self) -> Option<String> {
        if self.text().is_empty() {
            return None;
        }
        self.textarea.select_all();
        self.textarea.cut();
        Some(String::new())
    }
}
