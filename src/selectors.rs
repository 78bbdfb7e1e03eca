//! Field-to-selector tables.
//!
//! Every CSS selector and heading label the parsers depend on lives here, one
//! table per page, so a markup change on IMDb is fixed in a single place.

/// Title page (`/title/{id}`).
#[derive(Debug, Clone, Copy)]
pub struct HomepageSelectors {
    pub title_meta: &'static str,
    pub title_attr: &'static str,
    pub storyline_root: &'static str,
    pub storyline_block: &'static str,
    pub storyline_paragraph: &'static str,
    pub storyline_text: &'static str,
    pub block_heading: &'static str,
    pub genres_label: &'static str,
    pub genre_link: &'static str,
    pub details_root: &'static str,
    pub details_block: &'static str,
    pub country_label: &'static str,
    pub country_link: &'static str,
    pub runtime_label: &'static str,
    pub runtime_prefix: &'static str,
}

pub const HOMEPAGE: HomepageSelectors = HomepageSelectors {
    title_meta: r#"meta[property="og:title"]"#,
    title_attr: "content",
    storyline_root: "div#titleStoryLine",
    storyline_block: "div.canwrap",
    storyline_paragraph: "p",
    storyline_text: "span",
    block_heading: "h4",
    genres_label: "Genres",
    genre_link: "a",
    details_root: "div#titleDetails",
    details_block: "div.txt-block",
    country_label: "Country",
    country_link: "a",
    runtime_label: "Runtime",
    runtime_prefix: "Runtime:",
};

/// Full credits page (`/title/{id}/fullcredits`).
#[derive(Debug, Clone, Copy)]
pub struct CreditsSelectors {
    pub root: &'static str,
    pub director_table: &'static str,
    pub director_cell: &'static str,
    pub person_link: &'static str,
    pub person_href: &'static str,
    pub cast_table: &'static str,
    pub cast_row: &'static str,
    pub photo_cell: &'static str,
    pub photo_img: &'static str,
    pub photo_name_attr: &'static str,
    pub character_cell: &'static str,
    pub uncredited_marker: &'static str,
}

pub const CREDITS: CreditsSelectors = CreditsSelectors {
    root: "div#fullcredits_content",
    director_table: "table.simpleCreditsTable",
    director_cell: "td.name",
    person_link: "a",
    person_href: "href",
    cast_table: "table.cast_list",
    cast_row: "tr",
    photo_cell: "td.primary_photo",
    photo_img: "img",
    photo_name_attr: "title",
    character_cell: "td.character",
    uncredited_marker: "uncredited",
};

/// Plot summary page (`/title/{id}/plotsummary`).
#[derive(Debug, Clone, Copy)]
pub struct SynopsisSelectors {
    pub content: &'static str,
    pub placeholder_marker: &'static str,
}

pub const SYNOPSIS: SynopsisSelectors = SynopsisSelectors {
    content: "ul#plot-synopsis-content",
    placeholder_marker: "Edit page",
};

/// `/name/nm0000001/?ref_=...` splits into `["", "name", "nm0000001", ...]`.
pub const PERSON_ID_SEGMENT: usize = 2;
