//! Browser User-Agent resolution.
//!
//! The crawler asks a [`UserAgentSource`] once at construction and keeps the
//! answer for its whole lifetime. A failing source never fails construction:
//! [`resolve_user_agent`] logs and falls back to an empty header value.

use crate::error::UserAgentError;
use rand::seq::SliceRandom;
use tracing::warn;

/// Desktop Chrome strings the default pool picks from.
pub const CHROME_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/142.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/141.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/143.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/140.0.0.0 Safari/537.36",
];

/// Something that can hand out a realistic browser User-Agent.
pub trait UserAgentSource {
    fn user_agent(&self) -> Result<String, UserAgentError>;
}

/// Picks a random entry from a fixed list of Chrome agents.
#[derive(Debug, Clone)]
pub struct ChromeAgentPool {
    agents: Vec<String>,
}

impl ChromeAgentPool {
    pub fn new(agents: Vec<String>) -> Self {
        Self { agents }
    }
}

impl Default for ChromeAgentPool {
    fn default() -> Self {
        Self::new(CHROME_AGENTS.iter().map(|s| s.to_string()).collect())
    }
}

impl UserAgentSource for ChromeAgentPool {
    fn user_agent(&self) -> Result<String, UserAgentError> {
        self.agents
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(UserAgentError::EmptyPool)
    }
}

/// Always answers with the same value (e.g. a `--user-agent` override).
#[derive(Debug, Clone)]
pub struct FixedUserAgent(pub String);

impl UserAgentSource for FixedUserAgent {
    fn user_agent(&self) -> Result<String, UserAgentError> {
        if self.0.trim().is_empty() {
            return Err(UserAgentError::Blank);
        }
        Ok(self.0.clone())
    }
}

/// Ask `source` for an agent, substituting `""` on any failure.
pub fn resolve_user_agent(source: &dyn UserAgentSource) -> String {
    match source.user_agent() {
        Ok(agent) => agent,
        Err(e) => {
            warn!(error = %e, "Cannot resolve a user agent, sending an empty one");
            String::new()
        }
    }
}
