//! Applying worker responses to the client state

use super::app_state::{App, Modal};
use crate::api::ApiResponse;

impl App {
    /// Drain the response channel and apply everything that arrived
    pub fn poll_api(&mut self) {
        for response in self.api.poll() {
            self.apply_response(response);
            self.mark_dirty();
        }
    }

    pub fn apply_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::Blogs(blogs) => {
                #[cfg(debug_assertions)]
                log::debug!("Loaded {} blogs", blogs.len());

                self.blogs.replace_all(blogs);
            }
            ApiResponse::LoggedIn(session) => {
                let name = session.name.clone();
                match self.session.login(session) {
                    Ok(()) => self
                        .notification
                        .show_success(&format!("{} successfully logged in", name)),
                    Err(e) => {
                        log::warn!("Failed to persist session: {}", e);
                        self.notification.show_error(&format!(
                            "{} logged in, but the session could not be saved: {}",
                            name, e
                        ));
                    }
                }
                self.login_form.clear();
                if self.modal == Modal::Login {
                    self.modal = Modal::None;
                }
            }
            ApiResponse::Created(blog) => {
                self.notification.show_success(&format!(
                    "a new blog {} by {} added",
                    blog.title, blog.author
                ));
                self.blogs.insert(blog);
            }
            ApiResponse::Updated(blog) => {
                if !self.blogs.replace(blog) {
                    log::warn!("Server updated a blog that is not cached");
                }
            }
            ApiResponse::Deleted { id } => {
                self.blogs.remove(&id);
            }
            ApiResponse::Failed { message, .. } | ApiResponse::WorkerStopped { message } => {
                self.notification.show_error(&message);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_responses_tests.rs"]
mod app_responses_tests;
