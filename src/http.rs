use crate::error::FetchError;
use reqwest::{Client, header};
use std::time::Duration;
use tracing::{debug, warn};

/// The three IMDb pages a title is scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Homepage,
    Credits,
    Synopsis,
}

impl PageKind {
    /// Path suffix appended after the movie id.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            PageKind::Homepage => None,
            PageKind::Credits => Some("fullcredits"),
            PageKind::Synopsis => Some("plotsummary"),
        }
    }

    /// The movie id is interpolated as-is.
    pub fn url(self, base: &str, movie_id: &str) -> String {
        match self.suffix() {
            Some(suffix) => format!("{}/{}/{}", base, movie_id, suffix),
            None => format!("{}/{}", base, movie_id),
        }
    }
}

/// Retrieves raw HTML bodies.
#[async_trait::async_trait]
pub trait PageSource {
    async fn get(&self, url: &str, user_agent: &str) -> Result<String, FetchError>;
}

/// reqwest-backed [`PageSource`].
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|e| {
            warn!(error = %e, "Cannot configure HTTP client, using defaults");
            Client::new()
        });
        Self { client }
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl PageSource for HttpPageSource {
    async fn get(&self, url: &str, user_agent: &str) -> Result<String, FetchError> {
        debug!(url, "GET");
        let resp = self
            .client
            .get(url)
            .header(header::USER_AGENT, user_agent)
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.imdb.com/title";

    #[test]
    fn builds_page_urls() {
        assert_eq!(
            PageKind::Homepage.url(BASE, "tt0111161"),
            "https://www.imdb.com/title/tt0111161"
        );
        assert_eq!(
            PageKind::Credits.url(BASE, "tt0111161"),
            "https://www.imdb.com/title/tt0111161/fullcredits"
        );
        assert_eq!(
            PageKind::Synopsis.url(BASE, "tt0111161"),
            "https://www.imdb.com/title/tt0111161/plotsummary"
        );
    }

    #[test]
    fn movie_id_is_not_escaped() {
        assert_eq!(
            PageKind::Homepage.url(BASE, "tt 1/x"),
            "https://www.imdb.com/title/tt 1/x"
        );
    }
}
