use ratatui::crossterm::event::KeyEvent;
use ratatui::style::Style;
use tui_textarea::{Input, TextArea};

use crate::api::{Credentials, NewBlog};
use crate::theme;

const PASSWORD_MASK: char = '•';

fn create_field_textarea(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea.set_placeholder_text(placeholder);
    textarea
}

/// Labelled single-line text fields with one active field
pub struct FormFields {
    labels: Vec<&'static str>,
    fields: Vec<TextArea<'static>>,
    active: usize,
}

impl FormFields {
    pub fn new(labels: &[&'static str]) -> Self {
        Self {
            labels: labels.to_vec(),
            fields: labels.iter().map(|l| create_field_textarea(l)).collect(),
            active: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn label(&self, index: usize) -> &'static str {
        self.labels[index]
    }

    pub fn textarea(&self, index: usize) -> &TextArea<'static> {
        &self.fields[index]
    }

    pub fn value(&self, index: usize) -> String {
        self.fields[index]
            .lines()
            .first()
            .cloned()
            .unwrap_or_default()
    }

    pub fn focus_next(&mut self) {
        self.active = (self.active + 1) % self.fields.len();
    }

    pub fn focus_prev(&mut self) {
        self.active = (self.active + self.fields.len() - 1) % self.fields.len();
    }

    /// Forward a key to the active field; returns true if its text changed
    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.fields[self.active].input(Input::from(key))
    }

    pub fn insert_str(&mut self, text: &str) {
        // Fields are single line
        let single_line = text.replace(['\r', '\n'], "");
        self.fields[self.active].insert_str(single_line);
    }

    /// Empty every field. Fields are rebuilt rather than cut so no text is
    /// left behind in a yank buffer.
    pub fn clear(&mut self) {
        for (field, label) in self.fields.iter_mut().zip(&self.labels) {
            let mask = field.mask_char();
            *field = create_field_textarea(label);
            if let Some(mask) = mask {
                field.set_mask_char(mask);
            }
        }
        self.active = 0;
    }

    fn mask(&mut self, index: usize) {
        self.fields[index].set_mask_char(PASSWORD_MASK);
    }
}

pub struct LoginForm {
    pub fields: FormFields,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub const USERNAME: usize = 0;
    pub const PASSWORD: usize = 1;

    pub fn new() -> Self {
        let mut fields = FormFields::new(&["username", "password"]);
        fields.mask(Self::PASSWORD);
        Self { fields }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.fields.value(Self::USERNAME),
            password: self.fields.value(Self::PASSWORD),
        }
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

pub struct BlogForm {
    pub fields: FormFields,
}

impl Default for BlogForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BlogForm {
    pub const TITLE: usize = 0;
    pub const AUTHOR: usize = 1;
    pub const URL: usize = 2;

    pub fn new() -> Self {
        Self {
            fields: FormFields::new(&["title", "author", "url"]),
        }
    }

    pub fn new_blog(&self) -> NewBlog {
        NewBlog {
            title: self.fields.value(Self::TITLE),
            author: self.fields.value(Self::AUTHOR),
            url: self.fields.value(Self::URL),
        }
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

#[cfg(test)]
#[path = "form_fields_tests.rs"]
mod form_fields_tests;
