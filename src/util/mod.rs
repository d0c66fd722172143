//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `id` produces opaque identifiers and `form` binds input fields to typed
//! submit models, keeping both free of component code so they stay testable.

pub mod form;
pub mod id;
