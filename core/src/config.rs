//! Client construction parameters shared by both transport adapters.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.brawlapi.cf/v1";
pub const DEFAULT_CONSTANTS_URL: &str = "https://fourjr.herokuapp.com/bs/constants";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Token, endpoints and timeout for a client.
///
/// The token is sent verbatim in the `authorization` header. The timeout is
/// not used by the core; adapters hand it to their HTTP agent.
#[derive(Clone)]
pub struct ClientConfig {
    pub token: String,
    pub base_url: String,
    pub constants_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            constants_url: DEFAULT_CONSTANTS_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("brawl-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_constants_url(mut self, constants_url: &str) -> Self {
        self.constants_url = constants_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// The token stays out of debug output.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("constants_url", &self.constants_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
