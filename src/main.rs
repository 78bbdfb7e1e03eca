use clap::{Parser, ValueEnum};
use imdb_scrape::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use imdb_scrape::{CrawlerConfig, CreditsInfo, HomepageInfo, ImdbCrawler, SynopsisInfo, telemetry};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Page {
    Home,
    Credits,
    Synopsis,
    All,
}

/// Scrape IMDb title pages and print them as JSON
#[derive(Debug, Parser)]
#[command(name = "imdb-scrape", version)]
struct Args {
    /// IMDb title ids, e.g. tt0111161
    #[arg(required = true)]
    movie_ids: Vec<String>,

    /// Which page(s) to scrape
    #[arg(long, value_enum, default_value_t = Page::All)]
    page: Page,

    /// Title URL prefix
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds (0 disables it)
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Send this User-Agent instead of a random Chrome one
    #[arg(long)]
    user_agent: Option<String>,

    /// Print compact JSON, one object per line
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    homepage: Option<HomepageInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    credits: Option<CreditsInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    synopsis: Option<SynopsisInfo>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_subscriber("info");
    let args = Args::parse();

    let timeout = (args.timeout_secs > 0).then(|| Duration::from_secs(args.timeout_secs));
    let config = CrawlerConfig::default()
        .with_base_url(args.base_url)
        .with_timeout(timeout)
        .with_user_agent(args.user_agent);
    let crawler = ImdbCrawler::new(&config);

    for movie_id in &args.movie_ids {
        info!(movie_id = movie_id.as_str(), page = ?args.page, "Scraping");

        let wants = |page: Page| args.page == page || args.page == Page::All;
        let homepage = if wants(Page::Home) {
            Some(crawler.fetch_homepage(movie_id).await)
        } else {
            None
        };
        let credits = if wants(Page::Credits) {
            Some(crawler.fetch_credits(movie_id).await)
        } else {
            None
        };
        let synopsis = if wants(Page::Synopsis) {
            Some(crawler.fetch_synopsis(movie_id).await)
        } else {
            None
        };

        let report = Report {
            homepage,
            credits,
            synopsis,
        };
        let json = if args.compact {
            serde_json::to_string(&report)?
        } else {
            serde_json::to_string_pretty(&report)?
        };
        println!("{}", json);
    }

    Ok(())
}
