//! User-initiated operations
//!
//! Each action sends at most one request. The blog cache is never touched
//! here; it changes only when the matching response arrives.

use super::app_state::{App, Focus, Modal};
use crate::api::{ApiRequest, BlogUpdate};

impl App {
    fn send_request(&mut self, request: ApiRequest) -> bool {
        match self.api.send(request) {
            Ok(()) => true,
            Err(message) => {
                self.notification.show_error(&message);
                false
            }
        }
    }

    /// Re-fetch the whole collection
    pub fn refresh(&mut self) {
        self.send_request(ApiRequest::List);
    }

    pub fn open_login_form(&mut self) {
        if self.session.is_logged_in() {
            return;
        }
        self.modal = Modal::Login;
    }

    pub fn submit_login(&mut self) {
        let credentials = self.login_form.credentials();

        #[cfg(debug_assertions)]
        log::debug!("Logging in as {}", credentials.username);

        self.send_request(ApiRequest::Login(credentials));
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.logout() {
            self.notification
                .show_success(&format!("{} logged out", session.name));
        }
    }

    pub fn open_blog_form(&mut self) {
        if !self.session.is_logged_in() {
            self.notification.show_error("log in to create new blogs");
            return;
        }
        self.modal = Modal::NewBlog;
    }

    /// Hide the form and send its contents
    pub fn submit_blog(&mut self) {
        self.modal = Modal::None;

        let Some(token) = self.session.token().map(str::to_string) else {
            self.notification.show_error("log in to create new blogs");
            return;
        };

        let blog = self.blog_form.new_blog();
        self.blog_form.clear();
        self.send_request(ApiRequest::Create { blog, token });
    }

    pub fn like_selected(&mut self) {
        let Some(blog) = self.blogs.selected_blog() else {
            return;
        };
        let request = ApiRequest::Update {
            id: blog.id.clone(),
            blog: BlogUpdate::liked(blog),
            token: self.session.token().map(str::to_string),
        };
        self.send_request(request);
    }

    /// Ask for confirmation before removing the selected entry
    pub fn request_delete_selected(&mut self) {
        let Some(blog) = self.blogs.selected_blog() else {
            return;
        };
        if !self.session.is_logged_in() {
            self.notification.show_error("log in to remove blogs");
            return;
        }
        self.modal = Modal::ConfirmDelete {
            id: blog.id.clone(),
            title: blog.title.clone(),
            author: blog.author.clone(),
        };
    }

    pub fn confirm_delete(&mut self) {
        let Modal::ConfirmDelete { id, .. } = std::mem::take(&mut self.modal) else {
            return;
        };
        let Some(token) = self.session.token().map(str::to_string) else {
            self.notification.show_error("log in to remove blogs");
            return;
        };
        self.send_request(ApiRequest::Delete { id, token });
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::None;
    }

    pub fn focus_filter(&mut self) {
        self.focus = Focus::Filter;
    }

    pub fn focus_blog_list(&mut self) {
        self.focus = Focus::BlogList;
    }

    /// Push the filter text to the blog list
    pub fn apply_filter(&mut self, text: &str) {
        self.blogs.set_filter(text);
    }
}

#[cfg(test)]
#[path = "app_actions_tests.rs"]
mod app_actions_tests;
