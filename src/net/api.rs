//! HTTP helpers for the remote rental API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since listings are only
//! fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` with an [`ApiError`] instead of panics, so fetch
//! failures degrade to inline messages without crashing hydration. Optional
//! request/response logging is compiled in when the `RENTALCAR_API_LOGGING`
//! environment variable is set at build time.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::CarsPage;
use crate::state::filters::CarFilters;

/// Base URL of the remote rental API.
pub const API_BASE: &str = "https://car-rental-api.goit.global";

/// Failure modes of the rental API boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, blocked, SSR stub).
    #[error("network request failed: {0}")]
    Network(String),
    /// The API answered with a non-success status.
    #[error("GET {url} returned {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn brands_url() -> String {
    format!("{API_BASE}/brands")
}

#[cfg(any(test, feature = "hydrate"))]
fn cars_url(filters: &CarFilters, page: u32, limit: u32) -> String {
    let mut query = String::new();
    for (name, value) in filters.to_query_pairs() {
        query.push_str(name);
        query.push('=');
        query.push_str(&encode_query_value(&value));
        query.push('&');
    }
    format!("{API_BASE}/cars?{query}page={page}&limit={limit}")
}

/// Percent-encode a query value; RFC 3986 unreserved bytes pass through.
#[cfg(any(test, feature = "hydrate"))]
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Fetch the list of car brands from `GET /brands`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, the API answers with a
/// non-success status, or the body cannot be decoded.
pub async fn fetch_brands() -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(&brands_url()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one page of the car listing from `GET /cars`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, the API answers with a
/// non-success status, or the body cannot be decoded.
pub async fn fetch_cars(
    filters: &CarFilters,
    page: u32,
    limit: u32,
) -> Result<CarsPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        request_json(&cars_url(filters, page, limit)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filters, page, limit);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn request_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log_request(url);
    let resp = gloo_net::http::Request::get(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| {
            log_failure(url, &e.to_string());
            ApiError::Network(e.to_string())
        })?;
    if !resp.ok() {
        log_failure(url, &format!("status {}", resp.status()));
        return Err(ApiError::Status {
            url: url.to_owned(),
            status: resp.status(),
        });
    }
    log_response(resp.status(), url);
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Compile-time opt-in for request/response logging.
#[cfg(feature = "hydrate")]
fn logging_enabled() -> bool {
    matches!(option_env!("RENTALCAR_API_LOGGING"), Some("true" | "1"))
}

#[cfg(feature = "hydrate")]
fn log_request(url: &str) {
    if logging_enabled() {
        log::info!("[api request] GET {url}");
    }
}

#[cfg(feature = "hydrate")]
fn log_response(status: u16, url: &str) {
    if logging_enabled() {
        log::info!("[api response] {status} from {url}");
    }
}

#[cfg(feature = "hydrate")]
fn log_failure(url: &str, detail: &str) {
    if logging_enabled() {
        log::error!("[api error] {detail} at {url}");
    }
}
