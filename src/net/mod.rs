//! Networking modules for the remote rental API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the wire schema shared
//! with state and pages.

pub mod api;
pub mod types;
