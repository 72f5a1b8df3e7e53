//! HTTP API Client
//!
//! gloo-net glue around the backend endpoints. Every call funnels through
//! `post_opaque`/`decode_typed` so non-success statuses, empty bodies, and
//! malformed JSON are normalized in exactly one place.

use gloo_net::http::Request;
use serde_json::Value;

use super::error::ApiError;
use super::response::{decode_response, decode_typed};
use super::types::{ClubDataInput, ClusteringResult};

/// Default backend origin (local development deployment).
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

const STORAGE_KEY: &str = "club_analysis_api_url";

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(STORAGE_KEY) {
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

/// Set the API base URL in local storage.
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, url);
        }
    }
}

/// Log a failed call to the operator console before handing it back.
fn log_failure(endpoint: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("API call to {} failed: {}", endpoint, err).into());
}

/// POST to an endpoint with no request body, returning whatever JSON the
/// backend sends back. A 204 yields `Value::Null`.
async fn post_opaque(endpoint: &str) -> Result<Value, ApiError> {
    let url = format!("{}{}", get_api_base(), endpoint);

    let result = async {
        let response = Request::post(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = response.text().await.unwrap_or_default();
        decode_response(response.status(), &body)
    }
    .await;

    if let Err(e) = &result {
        log_failure(endpoint, e);
    }
    result
}

// ============ Scraping Endpoint Calls ============

/// Trigger the email scraper for the `.eml` files on the backend.
pub async fn trigger_email_scraping() -> Result<Value, ApiError> {
    post_opaque("/scraping/emails").await
}

/// Trigger analysis of the WhatsApp chat logs on the backend.
pub async fn trigger_whatsapp_analysis() -> Result<Value, ApiError> {
    post_opaque("/scraping/whatsapp").await
}

/// Trigger the Instagram scraper for a specific username.
pub async fn trigger_instagram_scraping(username: &str) -> Result<Value, ApiError> {
    let endpoint = format!("/scraping/instagram/{}", urlencoding::encode(username));
    post_opaque(&endpoint).await
}

// ============ Clustering Endpoint Call ============

/// Submit clubs for clustering and ranking.
pub async fn group_clubs(input: &ClubDataInput) -> Result<ClusteringResult, ApiError> {
    let endpoint = "/clustering/group-clubs";
    let url = format!("{}{}", get_api_base(), endpoint);

    let result = async {
        let response = Request::post(&url)
            .json(input)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = response.text().await.unwrap_or_default();
        decode_typed(response.status(), &body)
    }
    .await;

    if let Err(e) = &result {
        log_failure(endpoint, e);
    }
    result
}

// ============ Health ============

/// Check that the backend is reachable. The root endpoint answers with a
/// welcome message; any success status counts as healthy.
pub async fn check_health() -> Result<(), ApiError> {
    let url = format!("{}/", get_api_base());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        decode_response(response.status(), &body).map(|_| ())
    }
}
