//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 5000 for the quote backend.
///
/// # Returns
/// - API base URL like "http://localhost:5000/api"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000/api", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/"), e.g. "/categories"
/// or "/sizes/BOIS"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
