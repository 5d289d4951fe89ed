//! Login and new-blog forms
//!
//! Both are a column of single-line text fields with one active field.

mod form_fields;
pub mod form_render;

pub use form_fields::{BlogForm, FormFields, LoginForm};
