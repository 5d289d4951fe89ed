//! REST client for the blog-list backend
//!
//! Requests travel to a background worker over a channel and come back as
//! explicit `ApiResponse` values, one response per request, in order.

mod api_state;
mod api_types;
mod blog_client;
pub mod worker;

#[cfg(test)]
mod test_server;

pub use api_state::ApiState;
pub use api_types::{
    ApiRequest, ApiResponse, Blog, BlogUpdate, BlogUser, Credentials, NewBlog, RequestKind,
    UserSummary,
};
pub use blog_client::BlogClient;

use thiserror::Error;

/// Errors that can occur while talking to the backend
///
/// `Display` is the text shown to the user, so `Server` renders the
/// server-provided message verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never got a response
    #[error("{0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded
    #[error("Invalid response from server: {0}")]
    Decode(String),
}
