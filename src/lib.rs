//! bloglist library - Terminal client for a blog-list REST backend
//!
//! This library exposes the core functionality of bloglist for testing purposes.

pub mod api;
pub mod app;
pub mod blogs;
pub mod config;
pub mod error;
pub mod filter;
pub mod forms;
pub mod notification;
pub mod session;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Focus, Modal};
pub use config::Config;
