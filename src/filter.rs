//! Filter input
//!
//! A single-line text field. Every edit hands the new text straight to the
//! blog list; nothing is debounced or validated.

mod filter_render;
mod filter_state;

pub use filter_render::render_filter;
pub use filter_state::FilterState;
