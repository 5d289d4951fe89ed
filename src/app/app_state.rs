use crate::api::ApiState;
use crate::blogs::BlogList;
use crate::filter::FilterState;
use crate::forms::{BlogForm, LoginForm};
use crate::notification::NotificationState;
use crate::session::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    BlogList,
    Filter,
}

/// Popup currently capturing input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    None,
    Login,
    NewBlog,
    ConfirmDelete {
        id: String,
        title: String,
        author: String,
    },
}

/// All client state. Mutated only through the `impl App` entry points in
/// `app_actions`, `app_responses` and `app_events`.
pub struct App {
    pub blogs: BlogList,
    pub session: SessionState,
    pub notification: NotificationState,
    pub filter: FilterState,
    pub login_form: LoginForm,
    pub blog_form: BlogForm,
    pub modal: Modal,
    pub focus: Focus,
    pub api: ApiState,
    pub should_quit: bool,
    /// Something changed since the last draw
    needs_render: bool,
}

impl App {
    pub fn new(session: SessionState) -> Self {
        Self {
            blogs: BlogList::new(),
            session,
            notification: NotificationState::new(),
            filter: FilterState::new(),
            login_form: LoginForm::new(),
            blog_form: BlogForm::new(),
            modal: Modal::None,
            focus: Focus::BlogList,
            api: ApiState::new(),
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    pub fn current_user_name(&self) -> Option<&str> {
        self.session.current().map(|s| s.name.as_str())
    }
}
