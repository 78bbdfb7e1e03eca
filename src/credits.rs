//! Full credits page: director and cast.

use crate::dom;
use crate::error::ExtractError;
use crate::selectors::{CREDITS, PERSON_ID_SEGMENT};
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditsInfo {
    #[serde(rename = "imdb_id")]
    pub movie_id: String,
    pub director: Option<Person>,
    pub cast: Option<Vec<CastMember>>,
}

impl CreditsInfo {
    pub fn empty(movie_id: &str) -> Self {
        Self {
            movie_id: movie_id.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "id")]
    pub person_id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    #[serde(rename = "id")]
    pub person_id: String,
    pub name: String,
    pub character: String,
}

/// Director and cast as one all-or-nothing unit.
pub fn parse_credits(movie_id: &str, doc: &Html) -> Result<CreditsInfo, ExtractError> {
    let credits = dom::require(doc.root_element(), CREDITS.root)?;

    Ok(CreditsInfo {
        movie_id: movie_id.to_string(),
        director: Some(extract_director(credits)?),
        cast: extract_cast(credits)?,
    })
}

/// Only the first row of the first directors table is read.
fn extract_director(credits: ElementRef<'_>) -> Result<Person, ExtractError> {
    let table = dom::require(credits, CREDITS.director_table)?;
    let cell = dom::require(table, CREDITS.director_cell)?;
    let link = dom::require(cell, CREDITS.person_link)?;
    let href = dom::attr(link, CREDITS.person_link, CREDITS.person_href)?;

    Ok(Person {
        person_id: dom::path_segment(href, PERSON_ID_SEGMENT)?.to_string(),
        name: dom::trimmed_text(link),
    })
}

/// `None` when the page has no cast table at all.
fn extract_cast(credits: ElementRef<'_>) -> Result<Option<Vec<CastMember>>, ExtractError> {
    let Some(table) = dom::find(credits, CREDITS.cast_table)? else {
        return Ok(None);
    };

    let mut cast = Vec::new();
    for row in dom::find_all(table, CREDITS.cast_row)? {
        // header rows ("Rest of cast listed alphabetically") have no photo cell
        let Some(photo) = dom::find(row, CREDITS.photo_cell)? else {
            continue;
        };
        let link = dom::require(photo, CREDITS.person_link)?;
        let href = dom::attr(link, CREDITS.person_link, CREDITS.person_href)?;
        let person_id = dom::path_segment(href, PERSON_ID_SEGMENT)?.trim().to_string();
        let img = dom::require(link, CREDITS.photo_img)?;
        let name = dom::attr(img, CREDITS.photo_img, CREDITS.photo_name_attr)?
            .trim()
            .to_string();

        let character_cell = dom::require(row, CREDITS.character_cell)?;
        let character = dom::trimmed_text(character_cell).replace('\n', "");
        if character.contains(CREDITS.uncredited_marker) {
            continue;
        }

        cast.push(CastMember {
            person_id,
            name,
            character,
        });
    }

    Ok(Some(cast))
}
