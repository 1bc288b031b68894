//! Browser `localStorage` glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write access so stores can persist state
//! without repeating web-sys plumbing. Server-side (SSR) builds compile the
//! same call sites into no-ops, keeping server rendering deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;

/// Read the raw string stored under `key`, if any.
#[must_use]
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Serialize `value` as JSON and store it under `key`.
///
/// Best effort: an unavailable or full storage area logs a warning and the
/// session continues with in-memory state only.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            log::warn!("localStorage unavailable, {key} not persisted");
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
