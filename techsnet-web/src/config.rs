//! Frontend configuration module
//!
//! Values are baked in at compile time from environment variables so the
//! bundle can be pointed at a different backend without code changes.

/// Viewport width (logical pixels) from which the layout counts as wide.
pub const SIDEBAR_BREAKPOINT_PX: f64 = 768.0;

/// Horizontal travel (logical pixels) a leftward swipe needs to close the sidebar.
pub const SWIPE_CLOSE_THRESHOLD_PX: f64 = 50.0;

/// Communities requested per directory page.
pub const COMMUNITY_PAGE_SIZE: u32 = 12;

/// Delay before a search box edit triggers a directory request.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Largest image accepted as a question attachment.
pub const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// Frontend configuration for the backend location and diagnostics.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the backend API, without trailing slash.
    pub api_base_url: String,
    /// Console log level.
    pub log_level: log::Level,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TECHSNET_API_BASE_URL")
                .unwrap_or("http://localhost:8000")
                .trim_end_matches('/')
                .to_string(),
            log_level: option_env!("TECHSNET_LOG_LEVEL")
                .and_then(|level| level.parse().ok())
                .unwrap_or(log::Level::Info),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute URL of a backend endpoint.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Where the "Sign in with Google" button sends the browser.
    pub fn google_login_url(&self) -> String {
        self.api_url("login/google")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(config.api_base_url.starts_with("http"));
        assert!(!config.api_base_url.ends_with('/'));
    }

    #[test]
    fn test_api_url_joins_single_slash() {
        let config = FrontendConfig {
            api_base_url: "http://api.test".to_string(),
            log_level: log::Level::Debug,
        };
        assert_eq!(config.api_url("/me"), "http://api.test/me");
        assert_eq!(config.api_url("history"), "http://api.test/history");
        assert_eq!(config.google_login_url(), "http://api.test/login/google");
    }

    #[test]
    fn test_frontend_config_debug() {
        let config = FrontendConfig::new();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("api_base_url"));
    }
}
