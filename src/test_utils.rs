//! Shared test utilities for bloglist

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver, Sender};

    use crate::api::{ApiRequest, ApiResponse, Blog, BlogUser, UserSummary};
    use crate::app::App;
    use crate::session::{Session, SessionState};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// App with in-memory session and no worker attached
    pub fn test_app() -> App {
        App::new(SessionState::new_without_persistence())
    }

    /// App wired to test channels standing in for the API worker
    pub struct ConnectedApp {
        pub app: App,
        pub requests: Receiver<ApiRequest>,
        pub responses: Sender<ApiResponse>,
    }

    impl ConnectedApp {
        pub fn new() -> Self {
            let mut app = test_app();
            let (request_tx, request_rx) = mpsc::channel();
            let (response_tx, response_rx) = mpsc::channel();
            app.api.set_channels(request_tx, response_rx);
            Self {
                app,
                requests: request_rx,
                responses: response_tx,
            }
        }

        pub fn logged_in() -> Self {
            let mut connected = Self::new();
            connected.app.session.login(test_session()).unwrap();
            connected
        }

        /// The next request the app sent, if any
        pub fn sent(&self) -> Option<ApiRequest> {
            self.requests.try_recv().ok()
        }

        /// Deliver a response through the channel and let the app apply it
        pub fn respond(&mut self, response: ApiResponse) {
            self.responses.send(response).unwrap();
            self.app.poll_api();
        }
    }

    pub fn test_session() -> Session {
        Session {
            username: "mluukkai".to_string(),
            token: "token-123".to_string(),
            name: "Matti Luukkainen".to_string(),
        }
    }

    pub fn test_blog(id: &str, title: &str, author: &str, likes: u64) -> Blog {
        Blog {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            url: format!("http://example.com/{id}"),
            likes,
            user: Some(BlogUser::Populated(UserSummary {
                id: "u1".to_string(),
                username: "mluukkai".to_string(),
                name: "Matti Luukkainen".to_string(),
            })),
        }
    }

    pub fn sample_blogs() -> Vec<Blog> {
        vec![
            test_blog("1", "React patterns", "Michael Chan", 7),
            test_blog("2", "Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            test_blog("3", "Canonical string reduction", "Edsger W. Dijkstra", 12),
        ]
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }
}
