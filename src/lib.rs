//! Scraper for IMDb title pages: the homepage, the full credits page and the
//! plot summary page, each turned into a plain serde record.

pub mod config;
pub mod credits;
pub mod crawler;
pub mod dom;
pub mod error;
pub mod homepage;
pub mod http;
pub mod selectors;
pub mod synopsis;
pub mod telemetry;
pub mod user_agent;

pub use config::CrawlerConfig;
pub use crawler::ImdbCrawler;
pub use credits::{CastMember, CreditsInfo, Person};
pub use error::{ExtractError, FetchError, UserAgentError};
pub use homepage::{HomepageInfo, RuntimeVersion};
pub use http::{HttpPageSource, PageKind, PageSource};
pub use synopsis::SynopsisInfo;
pub use user_agent::{ChromeAgentPool, FixedUserAgent, UserAgentSource};
