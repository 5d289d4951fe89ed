use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus, Modal};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_api();

        if self.notification.clear_if_expired() {
            self.mark_dirty();
        }

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                    self.mark_dirty();
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                    self.mark_dirty();
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_paste_event(&mut self, text: String) {
        match self.modal {
            Modal::Login => self.login_form.fields.insert_str(&text),
            Modal::NewBlog => self.blog_form.fields.insert_str(&text),
            Modal::ConfirmDelete { .. } => {}
            Modal::None => {
                if let Some(filter) = self.filter.paste(&text) {
                    self.focus = Focus::Filter;
                    self.apply_filter(&filter);
                }
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.modal {
            Modal::Login | Modal::NewBlog => {
                self.handle_form_key(key);
                return;
            }
            Modal::ConfirmDelete { .. } => {
                self.handle_confirm_key(key);
                return;
            }
            Modal::None => {}
        }

        match self.focus {
            Focus::BlogList => self.handle_blog_list_key(key),
            Focus::Filter => self.handle_filter_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let is_login = self.modal == Modal::Login;
        match key.code {
            KeyCode::Esc => {
                self.close_modal();
                return;
            }
            KeyCode::Enter => {
                if is_login {
                    self.submit_login();
                } else {
                    self.submit_blog();
                }
                return;
            }
            _ => {}
        }

        let fields = if is_login {
            &mut self.login_form.fields
        } else {
            &mut self.blog_form.fields
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => fields.focus_next(),
            KeyCode::BackTab | KeyCode::Up => fields.focus_prev(),
            _ => {
                fields.input(key);
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => self.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Esc => self.close_modal(),
            _ => {}
        }
    }

    fn handle_blog_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.blogs.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.blogs.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => self.blogs.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.blogs.select_last(),
            KeyCode::Enter | KeyCode::Char(' ') => self.blogs.toggle_details(),
            KeyCode::Char('l') => self.like_selected(),
            KeyCode::Char('d') => self.request_delete_selected(),
            KeyCode::Char('n') => self.open_blog_form(),
            KeyCode::Char('L') => self.open_login_form(),
            KeyCode::Char('O') => self.logout(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('/') => self.focus_filter(),
            KeyCode::Esc => {
                if let Some(filter) = self.filter.clear() {
                    self.apply_filter(&filter);
                }
            }
            _ => {}
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Down => self.focus_blog_list(),
            _ => {
                if let Some(filter) = self.filter.input(key) {
                    self.apply_filter(&filter);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
