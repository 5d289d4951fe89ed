mod app_actions;
mod app_events;
mod app_render;
mod app_responses;
mod app_state;

// Re-export public types
pub use app_state::{App, Focus, Modal};
