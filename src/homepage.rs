//! Title page: title, storyline, genres, country and runtime versions.
//!
//! Parsing runs as three independent sections. A section that fails is logged
//! and leaves only its own fields empty.

use crate::dom;
use crate::error::ExtractError;
use crate::selectors::HOMEPAGE;
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageInfo {
    #[serde(rename = "imdb_id")]
    pub movie_id: String,
    pub title: Option<String>,
    pub genres: Option<Vec<String>>,
    pub country: Option<String>,
    #[serde(rename = "version")]
    pub versions: Vec<RuntimeVersion>,
    pub storyline: Option<String>,
}

impl HomepageInfo {
    /// A record with nothing but the id filled in.
    pub fn empty(movie_id: &str) -> Self {
        Self {
            movie_id: movie_id.to_string(),
            ..Self::default()
        }
    }
}

/// One cut of the film, e.g. `{"runtime": "150 min", "description": "Director's cut"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeVersion {
    pub runtime: String,
    pub description: String,
}

pub fn parse_homepage(movie_id: &str, doc: &Html) -> HomepageInfo {
    let mut info = HomepageInfo::empty(movie_id);
    let root = doc.root_element();

    match extract_title(root) {
        Ok(title) => info.title = Some(title),
        Err(e) => warn!(movie_id, error = %e, "Cannot find title"),
    }

    match extract_storyline_and_genres(root) {
        Ok((storyline, genres)) => {
            info.storyline = storyline;
            info.genres = genres;
        }
        Err(e) => warn!(movie_id, error = %e, "Cannot find storyline or genres"),
    }

    match extract_country_and_versions(root) {
        Ok((country, versions)) => {
            info.country = country;
            info.versions = versions;
        }
        Err(e) => warn!(movie_id, error = %e, "Cannot find country or runtime"),
    }

    info
}

/// `og:title` content up to the first `-`, e.g. "The Matrix (1999) - IMDb".
pub fn extract_title(root: ElementRef<'_>) -> Result<String, ExtractError> {
    let meta = dom::require(root, HOMEPAGE.title_meta)?;
    let content = dom::attr(meta, HOMEPAGE.title_meta, HOMEPAGE.title_attr)?;
    let head = content.split('-').next().unwrap_or_default();
    Ok(head.trim().to_string())
}

pub fn extract_storyline_and_genres(
    root: ElementRef<'_>,
) -> Result<(Option<String>, Option<Vec<String>>), ExtractError> {
    let story_line = dom::require(root, HOMEPAGE.storyline_root)?;
    let mut storyline = None;
    let mut genres = None;

    for block in dom::find_all(story_line, HOMEPAGE.storyline_block)? {
        if let Some(p) = dom::find(block, HOMEPAGE.storyline_paragraph)? {
            let span = dom::require(p, HOMEPAGE.storyline_text)?;
            storyline = Some(dom::trimmed_text(span));
            continue;
        }

        let Some(heading) = dom::find(block, HOMEPAGE.block_heading)? else {
            continue;
        };
        if dom::text(heading).contains(HOMEPAGE.genres_label) {
            let links = dom::find_all(block, HOMEPAGE.genre_link)?;
            genres = Some(links.into_iter().map(dom::trimmed_text).collect());
        }
    }

    Ok((storyline, genres))
}

pub fn extract_country_and_versions(
    root: ElementRef<'_>,
) -> Result<(Option<String>, Vec<RuntimeVersion>), ExtractError> {
    let details = dom::require(root, HOMEPAGE.details_root)?;
    let mut country = None;
    let mut versions = Vec::new();

    for block in dom::find_all(details, HOMEPAGE.details_block)? {
        let Some(heading) = dom::find(block, HOMEPAGE.block_heading)? else {
            continue;
        };
        let label = dom::text(heading);

        if label.contains(HOMEPAGE.country_label) {
            let link = dom::require(block, HOMEPAGE.country_link)?;
            country = Some(dom::trimmed_text(link));
        }
        if label.contains(HOMEPAGE.runtime_label) {
            let text = dom::text(block).trim().replace(HOMEPAGE.runtime_prefix, "");
            for segment in text.split('|') {
                versions.push(parse_runtime(segment)?);
            }
        }
    }

    Ok((country, versions))
}

/// `" 150 min (Director's cut)"` -> `{"150 min", "Director's cut"}`.
fn parse_runtime(segment: &str) -> Result<RuntimeVersion, ExtractError> {
    let (minutes, rest) = segment
        .split_once("min")
        .ok_or_else(|| ExtractError::Malformed {
            field: "runtime",
            value: segment.trim().to_string(),
        })?;
    let description = rest.trim().replace(['(', ')'], "");

    Ok(RuntimeVersion {
        runtime: format!("{} min", minutes.trim()),
        description: description.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><head>
          <meta property="og:title" content="The Shawshank Redemption (1994) - IMDb" />
        </head><body>
          <div id="titleStoryLine">
            <div class="inline canwrap">
              <p><span>
                Two imprisoned men bond over a number of years.
              </span><em class="nobr">Written by X</em></p>
            </div>
            <div class="see-more inline canwrap">
              <h4 class="inline">Genres:</h4>
              <a href="/search/title?genres=crime"> Crime</a>
              <span>|</span>
              <a href="/search/title?genres=drama">Drama </a>
            </div>
          </div>
          <div id="titleDetails">
            <div class="txt-block">
              <h4 class="inline">Country:</h4>
              <a href="/search/title?country_of_origin=us"> USA </a>
            </div>
            <div class="txt-block">
              <h4 class="inline">Runtime:</h4>
              <time datetime="PT142M">142 min</time>
              | <time datetime="PT150M">150 min</time> (Director's cut)
            </div>
          </div>
        </body></html>
    "#;

    fn parse(html: &str) -> HomepageInfo {
        parse_homepage("tt0111161", &Html::parse_document(html))
    }

    #[test]
    fn parses_every_section() {
        let info = parse(PAGE);
        assert_eq!(info.movie_id, "tt0111161");
        assert_eq!(info.title.as_deref(), Some("The Shawshank Redemption (1994)"));
        assert_eq!(
            info.storyline.as_deref(),
            Some("Two imprisoned men bond over a number of years.")
        );
        assert_eq!(
            info.genres,
            Some(vec!["Crime".to_string(), "Drama".to_string()])
        );
        assert_eq!(info.country.as_deref(), Some("USA"));
    }

    #[test]
    fn runtime_versions_keep_order() {
        let info = parse(PAGE);
        assert_eq!(
            info.versions,
            vec![
                RuntimeVersion {
                    runtime: "142 min".to_string(),
                    description: String::new(),
                },
                RuntimeVersion {
                    runtime: "150 min".to_string(),
                    description: "Director's cut".to_string(),
                },
            ]
        );
    }

    #[test]
    fn missing_title_leaves_other_fields_alone() {
        let html = PAGE.replace("og:title", "og:description");
        let info = parse(&html);
        assert_eq!(info.title, None);
        assert_eq!(info.country.as_deref(), Some("USA"));
        assert_eq!(info.versions.len(), 2);
        assert!(info.storyline.is_some());
        assert!(info.genres.is_some());
    }

    #[test]
    fn missing_storyline_section_keeps_title() {
        let html = PAGE.replace("titleStoryLine", "somethingElse");
        let info = parse(&html);
        assert_eq!(info.title.as_deref(), Some("The Shawshank Redemption (1994)"));
        assert_eq!(info.storyline, None);
        assert_eq!(info.genres, None);
        assert_eq!(info.country.as_deref(), Some("USA"));
    }

    #[test]
    fn malformed_runtime_clears_the_details_section() {
        let html = PAGE.replace("150 min", "two and a half hours");
        let info = parse(&html);
        assert_eq!(info.country, None);
        assert!(info.versions.is_empty());
        assert!(info.title.is_some());
    }

    #[test]
    fn empty_document_yields_id_only() {
        assert_eq!(parse("<html></html>"), HomepageInfo::empty("tt0111161"));
    }

    #[test]
    fn serializes_with_crawler_key_names() {
        let json = serde_json::to_value(parse(PAGE)).unwrap();
        assert_eq!(json["imdb_id"], "tt0111161");
        assert_eq!(json["version"][1]["runtime"], "150 min");
        assert_eq!(json["genres"][0], "Crime");
    }

    #[test]
    fn deserializes_crawler_json() {
        let json = r#"{
            "imdb_id": "tt0113277",
            "title": "Heat (1995)",
            "genres": ["Crime"],
            "country": null,
            "version": [{"runtime": "170 min", "description": ""}],
            "storyline": null
        }"#;
        let info: HomepageInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.movie_id, "tt0113277");
        assert_eq!(info.versions[0].runtime, "170 min");
        let back: HomepageInfo =
            serde_json::from_str(&serde_json::to_string(&info).unwrap()).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn runtime_splits_at_the_first_min_only() {
        let html = r#"<div id="titleDetails"><div class="txt-block">
            <h4 class="inline">Runtime:</h4> 150 min (Criminal Edition) | 20 min (admin cut)
          </div></div>"#;
        let info = parse(html);
        assert_eq!(
            info.versions,
            vec![
                RuntimeVersion {
                    runtime: "150 min".to_string(),
                    description: "Criminal Edition".to_string(),
                },
                RuntimeVersion {
                    runtime: "20 min".to_string(),
                    description: "admin cut".to_string(),
                },
            ]
        );
    }
}
