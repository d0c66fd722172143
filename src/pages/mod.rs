//! Page-level components.

pub mod post;
