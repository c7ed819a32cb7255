//! Lookup client configuration

/// Gateway URL used when nothing else is configured
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:5000";

/// Settings the lookup client is constructed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the gateway, without the `/api/search` path
    pub gateway_url: String,
    /// Show a loading indicator while a lookup is pending
    pub show_progress: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            show_progress: true,
        }
    }
}

impl ClientConfig {
    pub fn with_gateway_url(mut self, url: impl Into<String>) -> Self {
        self.gateway_url = url.into();
        self
    }

    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Full URL of the search endpoint
    pub fn search_url(&self) -> String {
        format!("{}/api/search", self.gateway_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_joins_path() {
        assert_eq!(
            ClientConfig::default().search_url(),
            "http://localhost:5000/api/search"
        );
        let config = ClientConfig::default().with_gateway_url("https://lookup.example.com/");
        assert_eq!(config.search_url(), "https://lookup.example.com/api/search");
    }
}
