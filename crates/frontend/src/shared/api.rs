//! Data-fetch helpers for the page components.
//!
//! Athlete and community listings come from opaque JSON endpoints on the
//! same origin. Errors surface as `String` into page-level error signals.

use contracts::{Athlete, AthleteFilter, CommunityBreakdown};
use gloo_net::http::Request;

/// Get the base URL for data requests
///
/// # Returns
/// - Origin like "http://localhost:8080" or "https://example.com"
/// - Empty string if window is not available (requests then stay same-origin
///   relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full URL from an API path
///
/// # Example
/// ```rust,no_run
/// use frontend::shared::api::api_url;
/// let url = api_url("/api/athletes");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Fetch the athlete listing, optionally narrowed by a server-side filter.
pub async fn fetch_athletes(filter: Option<&AthleteFilter>) -> Result<Vec<Athlete>, String> {
    let mut url = api_url("/api/athletes");
    if let Some(filter) = filter {
        if !filter.is_empty() {
            match serde_qs::to_string(filter) {
                Ok(query) => url = format!("{}?{}", url, query),
                Err(e) => log::warn!("athlete filter not encodable, fetching unfiltered: {}", e),
            }
        }
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("athletes request failed: {}", e))?;
    if !response.ok() {
        return Err(format!("athletes endpoint returned {}", response.status()));
    }
    response
        .json::<Vec<Athlete>>()
        .await
        .map_err(|e| format!("invalid athletes payload: {}", e))
}

/// Fetch the community membership breakdown (sports and gender slices).
pub async fn fetch_communities() -> Result<CommunityBreakdown, String> {
    let response = Request::get(&api_url("/api/communities"))
        .send()
        .await
        .map_err(|e| format!("communities request failed: {}", e))?;
    if !response.ok() {
        return Err(format!(
            "communities endpoint returned {}",
            response.status()
        ));
    }
    response
        .json::<CommunityBreakdown>()
        .await
        .map_err(|e| format!("invalid communities payload: {}", e))
}
