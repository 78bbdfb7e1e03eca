use crate::dom;
use crate::error::ExtractError;
use crate::selectors::SYNOPSIS;
use scraper::Html;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynopsisInfo {
    pub synopsis: Option<String>,
}

/// Synopsis text, or `None` when IMDb only shows its "Edit page" placeholder.
pub fn parse_synopsis(doc: &Html) -> Result<Option<String>, ExtractError> {
    let list = dom::require(doc.root_element(), SYNOPSIS.content)?;
    let synopsis = dom::trimmed_text(list);

    if synopsis.contains(SYNOPSIS.placeholder_marker) {
        return Ok(None);
    }
    Ok(Some(synopsis))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(html: &str) -> Result<Option<String>, ExtractError> {
        parse_synopsis(&Html::parse_document(html))
    }

    #[test]
    fn reads_synopsis_list() {
        let html = r#"<ul class="ipl-zebra-list" id="plot-synopsis-content">
            <li class="ipl-zebra-list__item" id="synopsis-py2163867">
              In 1947, banker Andy Dufresne is convicted of murdering his wife.
            </li></ul>"#;
        assert_eq!(
            parse(html).unwrap().as_deref(),
            Some("In 1947, banker Andy Dufresne is convicted of murdering his wife.")
        );
    }

    #[test]
    fn placeholder_page_has_no_synopsis() {
        let html = r#"<ul id="plot-synopsis-content"><li>Edit page</li></ul>"#;
        assert_eq!(parse(html).unwrap(), None);

        let html = r#"<ul id="plot-synopsis-content"><li>
            It looks like we don't have a Synopsis for this title yet.
            <a href="/x">Edit page</a></li></ul>"#;
        assert_eq!(parse(html).unwrap(), None);
    }

    #[test]
    fn json_round_trip() {
        let info: SynopsisInfo = serde_json::from_str(r#"{"synopsis": null}"#).unwrap();
        assert_eq!(info, SynopsisInfo::default());
        assert_eq!(serde_json::to_string(&info).unwrap(), r#"{"synopsis":null}"#);
    }

    #[test]
    fn missing_list_is_an_error() {
        assert_eq!(
            parse("<html><body><ul id=\"other\"></ul></body></html>"),
            Err(ExtractError::MissingElement {
                selector: "ul#plot-synopsis-content"
            })
        );
    }
}
