use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.imdb.com/title";

/// Default timeout for HTTP requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for an [`ImdbCrawler`](crate::ImdbCrawler).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlerConfig {
    /// Title prefix every page URL is built from, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Fixed User-Agent value. When unset a random Chrome agent is picked once.
    pub user_agent: Option<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: None,
        }
    }
}

impl CrawlerConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }
}
