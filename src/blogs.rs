//! Cached blog collection
//!
//! `BlogList` is the client's copy of the remote collection. It only ever
//! changes from server payloads and stays sorted by likes, most first.

mod blog_list;
pub mod blog_render;

pub use blog_list::BlogList;
