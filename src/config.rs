//! Dashboard configuration
//!
//! The browser bundle reads `BACKEND_URL` at compile time (the equivalent of a
//! front-end environment file). Native binaries read the process environment
//! and let `clap` flags override it.

use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_INDEX: &str = "logs-2024.12.01";
pub const DEFAULT_SEARCH_SIZE: u32 = 10;
pub const DEFAULT_REFRESH_SECS: u64 = 5;
pub const DEFAULT_SEND_REFRESH_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the backend, without trailing slash
    pub backend_url: String,
    /// Period of the auto-refresh of messages and search results
    pub refresh_interval: Duration,
    /// `size` parameter sent with every index search
    pub search_size: u32,
    /// Index selected before the index list arrives
    pub default_index: String,
    /// Delay before re-reading messages after a successful send
    pub send_refresh_delay: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            search_size: DEFAULT_SEARCH_SIZE,
            default_index: DEFAULT_INDEX.to_string(),
            send_refresh_delay: Duration::from_millis(DEFAULT_SEND_REFRESH_DELAY_MS),
        }
    }
}

impl DashboardConfig {
    /// Load configuration for the current target
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "BACKEND_URL" => option_env!("BACKEND_URL").map(str::to_string),
            "REFRESH_INTERVAL_SECS" => option_env!("REFRESH_INTERVAL_SECS").map(str::to_string),
            "SEARCH_SIZE" => option_env!("SEARCH_SIZE").map(str::to_string),
            "DEFAULT_INDEX" => option_env!("DEFAULT_INDEX").map(str::to_string),
            _ => None,
        })
    }

    /// Load configuration for the current target
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from a key lookup, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // "/" normalizes to "", i.e. same-origin requests through the proxy
        let backend_url = lookup("BACKEND_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| normalize_base_url(&url))
            .unwrap_or(defaults.backend_url);

        let refresh_interval = lookup("REFRESH_INTERVAL_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.refresh_interval);

        let search_size = lookup("SEARCH_SIZE")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(defaults.search_size);

        let default_index = lookup("DEFAULT_INDEX")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_index);

        Self {
            backend_url,
            refresh_interval,
            search_size,
            default_index,
            send_refresh_delay: defaults.send_refresh_delay,
        }
    }

    pub fn with_backend_url(mut self, url: &str) -> Self {
        self.backend_url = normalize_base_url(url);
        self
    }
}

/// Strip whitespace and trailing slashes so endpoints can be appended with `/`
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
