//! Client configuration

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.coinbase.com";

/// Version segment prefixed to every endpoint path
pub const DEFAULT_API_PATH: &str = "v2";

/// Value sent in the `CB-VERSION` header
pub const DEFAULT_API_VERSION: &str = "2015-04-08";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default redirect limit
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Client configuration
///
/// Immutable once handed to a client. Point `base_url` at a mock server to
/// test without touching the real exchange; the signed path is unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and host, without a trailing path
    pub base_url: String,
    /// Version path segment (signed as `/{api_path}/{endpoint}`)
    pub api_path: String,
    /// `CB-VERSION` header value
    pub api_version: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum redirects followed by the transport
    pub max_redirects: usize,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set version path segment
    pub fn with_api_path(mut self, api_path: impl Into<String>) -> Self {
        self.api_path = api_path.into();
        self
    }

    /// Set `CB-VERSION` header value
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set redirect limit
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Path that is both signed and requested, e.g. `/v2/accounts`
    pub fn request_path(&self, endpoint: &str) -> String {
        let prefix = self.api_path.trim_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        if prefix.is_empty() {
            format!("/{}", endpoint)
        } else {
            format!("/{}/{}", prefix, endpoint)
        }
    }

    /// Full URL for a signed request path
    pub fn url(&self, request_path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), request_path)
    }

    pub(crate) fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(concat!("coinbase-rest/", env!("CARGO_PKG_VERSION")))
    }
}
