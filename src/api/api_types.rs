use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Creator of a blog entry, as returned by the backend
///
/// The list endpoint populates the creator; other endpoints may only carry
/// the creator's id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BlogUser {
    Populated(UserSummary),
    Id(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
}

impl BlogUser {
    pub fn id(&self) -> &str {
        match self {
            BlogUser::Populated(user) => &user.id,
            BlogUser::Id(id) => id,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            BlogUser::Populated(user) if !user.name.is_empty() => Some(&user.name),
            BlogUser::Populated(user) if !user.username.is_empty() => Some(&user.username),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Blog {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<BlogUser>,
}

/// Payload for creating a blog
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
}

/// Payload for replacing a blog
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BlogUpdate {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl BlogUpdate {
    /// The update that adds one like to `blog`
    pub fn liked(blog: &Blog) -> Self {
        Self {
            title: blog.title.clone(),
            author: blog.author.clone(),
            url: blog.url.clone(),
            likes: blog.likes.saturating_add(1),
            user: blog.user.as_ref().map(|u| u.id().to_string()),
        }
    }
}

#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a backend error response
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub error: Option<String>,
}

/// Request messages sent to the API worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    List,
    Login(Credentials),
    Create {
        blog: NewBlog,
        token: String,
    },
    Update {
        id: String,
        blog: BlogUpdate,
        token: Option<String>,
    },
    Delete {
        id: String,
        token: String,
    },
}

impl ApiRequest {
    pub fn kind(&self) -> RequestKind {
        match self {
            ApiRequest::List => RequestKind::List,
            ApiRequest::Login(_) => RequestKind::Login,
            ApiRequest::Create { .. } => RequestKind::Create,
            ApiRequest::Update { .. } => RequestKind::Update,
            ApiRequest::Delete { .. } => RequestKind::Delete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    List,
    Login,
    Create,
    Update,
    Delete,
}

/// Response messages received from the API worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    Blogs(Vec<Blog>),
    LoggedIn(Session),
    Created(Blog),
    Updated(Blog),
    Deleted { id: String },
    Failed { request: RequestKind, message: String },
    /// The worker thread is gone; nothing else will be answered
    WorkerStopped { message: String },
}

#[cfg(test)]
#[path = "api_types_tests.rs"]
mod api_types_tests;
