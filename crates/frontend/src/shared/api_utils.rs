//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Base URL baked in at build time, e.g. `API_BASE_URL=https://api.example.com trunk build`.
const BUILD_API_BASE: Option<&str> = option_env!("API_BASE_URL");

/// Get the base URL for API requests
///
/// Uses `API_BASE_URL` when it was set at compile time. Otherwise falls back
/// to the current window location with port 3000 (local development).
///
/// # Returns
/// - API base URL like "https://api.example.com" or "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = BUILD_API_BASE.filter(|b| !b.trim().is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/listings/v1/getAllProperties");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Path with one URL-encoded trailing segment: `/careers/v1/deleteCareer/{id}`.
pub fn api_url_with(path: &str, segment: &str) -> String {
    format!("{}{}/{}", api_base(), path, urlencoding::encode(segment))
}
