//! # post-composer
//!
//! Leptos + WASM frontend for a two-step post flow: create a post through a
//! simulated API call, then leave a commentary once the post has an id.
//!
//! This crate contains the root app, the post page, the two form components,
//! the shared post state, the simulated API and the small form layer that
//! binds inputs to signals.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
