//! Networking modules for the simulated post API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` stands in for the remote post endpoint and `types` defines the
//! request/response shapes a real backend would exchange.

pub mod api;
pub mod types;
