//! HTTP API Client
//!
//! Functions for communicating with the Marquee REST API.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("marquee_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

/// Payload returned by `GET /api/data`
///
/// A body without a `message` string fails to decode, so a malformed
/// response surfaces as a parse error instead of rendering a hole.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============ API Functions ============

/// Fetch the message payload
pub async fn fetch_message() -> Result<MessageResponse, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/data", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server returned HTTP {}", response.status()));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
