//! Application configuration.
//!
//! Centralized configuration for the moderation client. These are
//! fixed configuration points; the HTTP transport is built from a
//! [`ClientConfig`] so tests and alternate deployments can pass their own.

/// Moderation API base URL.
pub const API_BASE_URL: &str = "http://localhost:8000";

/// Timeout applied to every request, in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "auth_token";

/// File picker filter.
pub const ACCEPTED_IMAGE_TYPES: &str = "image/*";

/// Page title.
pub const APP_TITLE: &str = "Image Moderation";

/// Connection settings for the moderation service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing path, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u32,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms,
        }
    }

    /// Join the base URL and an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(API_BASE_URL, REQUEST_TIMEOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.endpoint("/moderate"), "http://localhost:8000/moderate");
    }

    #[test]
    fn test_endpoint_does_not_double_slashes() {
        let config = ClientConfig::new("https://api.example.com/", 5_000);
        assert_eq!(config.endpoint("moderate"), "https://api.example.com/moderate");
        assert_eq!(
            config.endpoint("/moderate/categories"),
            "https://api.example.com/moderate/categories"
        );
    }
}
