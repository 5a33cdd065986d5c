//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::ApiConfig;

/// Build a full API URL from a backend path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config.api, "/user/get/12"); // "/api/user/get/12"
/// ```
pub fn api_url(api: &ApiConfig, path: &str) -> String {
    let base = api.base_path.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_path: &str) -> ApiConfig {
        ApiConfig {
            base_path: base_path.to_string(),
        }
    }

    #[test]
    fn test_api_url_joins_slashes() {
        assert_eq!(api_url(&api("/api"), "/user/get/1"), "/api/user/get/1");
        assert_eq!(api_url(&api("/api/"), "user/register"), "/api/user/register");
        assert_eq!(api_url(&api(""), "/source/save"), "/source/save");
    }
}
