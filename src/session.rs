//! Session module for bloglist
//!
//! The authenticated user context cached client-side, and its single-file
//! local storage.

mod session_state;
pub mod session_storage;

pub use session_state::{Session, SessionState};
