use std::time::Duration;

/// Default base URL of the Zoom v2 REST API.
pub const DEFAULT_API_URL: &str = "https://api.zoom.us/v2";

/// Configuration for the Zoom client.
#[derive(Debug, Clone)]
pub struct ZoomConfig {
    /// Base URL for the REST API (e.g. `https://api.zoom.us/v2`).
    pub base_url: String,
    /// OAuth access token sent as a bearer token. Obtaining and refreshing it
    /// is the caller's job.
    pub access_token: Option<String>,
    /// Per-request timeout handed to the HTTP transport.
    pub timeout: Option<Duration>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            access_token: None,
            timeout: None,
        }
    }
}

impl ZoomConfig {
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
