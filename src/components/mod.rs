//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the two forms and read/write the shared post state from
//! the `PostProvider` context.

pub mod commentary_form;
pub mod form_field;
pub mod post_form;
