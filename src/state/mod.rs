//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `post` is the provider-scoped state every form reads; `submit` tracks
//! in-flight post submissions for the loading indicator.

pub mod post;
pub mod submit;
