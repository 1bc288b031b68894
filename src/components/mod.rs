//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and car content while reading/writing
//! shared state from Leptos context providers.

pub mod car_card;
pub mod filter_bar;
pub mod header;
