use crate::config::CrawlerConfig;
use crate::credits::{CreditsInfo, parse_credits};
use crate::error::FetchError;
use crate::homepage::{HomepageInfo, parse_homepage};
use crate::http::{HttpPageSource, PageKind, PageSource};
use crate::synopsis::{SynopsisInfo, parse_synopsis};
use crate::user_agent::{ChromeAgentPool, FixedUserAgent, UserAgentSource, resolve_user_agent};
use scraper::Html;
use tracing::warn;

/// Fetches IMDb title pages and extracts what it can from them.
///
/// Every fetch method returns a record: transport and markup failures are
/// logged and surface only as empty fields. One request is in flight per call.
pub struct ImdbCrawler<S = HttpPageSource> {
    source: S,
    base_url: String,
    user_agent: String,
}

impl ImdbCrawler<HttpPageSource> {
    pub fn new(config: &CrawlerConfig) -> Self {
        let source = HttpPageSource::new(config.timeout);
        match &config.user_agent {
            Some(agent) => {
                Self::with_source(source, &FixedUserAgent(agent.clone()), &config.base_url)
            }
            None => Self::with_source(source, &ChromeAgentPool::default(), &config.base_url),
        }
    }
}

impl<S: PageSource> ImdbCrawler<S> {
    pub fn with_source(source: S, user_agents: &dyn UserAgentSource, base_url: &str) -> Self {
        Self {
            source,
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: resolve_user_agent(user_agents),
        }
    }

    /// The User-Agent header value sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Title, storyline, genres, country and runtime versions.
    ///
    /// When the page cannot be fetched the record only carries `movie_id`.
    pub async fn fetch_homepage(&self, movie_id: &str) -> HomepageInfo {
        let body = match self.get(PageKind::Homepage, movie_id).await {
            Ok(body) => body,
            Err(e) => {
                warn!(movie_id, error = %e, "Cannot fetch homepage");
                return HomepageInfo::empty(movie_id);
            }
        };

        parse_homepage(movie_id, &Html::parse_document(&body))
    }

    /// Director and cast; both stay `None` if anything on the way fails.
    pub async fn fetch_credits(&self, movie_id: &str) -> CreditsInfo {
        let body = match self.get(PageKind::Credits, movie_id).await {
            Ok(body) => body,
            Err(e) => {
                warn!(movie_id, error = %e, "Cannot find credits");
                return CreditsInfo::empty(movie_id);
            }
        };

        parse_credits(movie_id, &Html::parse_document(&body)).unwrap_or_else(|e| {
            warn!(movie_id, error = %e, "Cannot find credits");
            CreditsInfo::empty(movie_id)
        })
    }

    pub async fn fetch_synopsis(&self, movie_id: &str) -> SynopsisInfo {
        let body = match self.get(PageKind::Synopsis, movie_id).await {
            Ok(body) => body,
            Err(e) => {
                warn!(movie_id, error = %e, "Cannot fetch synopsis");
                return SynopsisInfo::default();
            }
        };

        let synopsis = parse_synopsis(&Html::parse_document(&body)).unwrap_or_else(|e| {
            warn!(movie_id, error = %e, "Cannot find synopsis");
            None
        });
        SynopsisInfo { synopsis }
    }

    async fn get(&self, kind: PageKind, movie_id: &str) -> Result<String, FetchError> {
        let url = kind.url(&self.base_url, movie_id);
        self.source.get(&url, &self.user_agent).await
    }
}
