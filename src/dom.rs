//! Tree navigation helpers shared by the page parsers.

use crate::error::ExtractError;
use scraper::{ElementRef, Selector};

pub fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::InvalidSelector {
        selector: css,
        reason: e.to_string(),
    })
}

/// First descendant of `scope` matching `css`, if any.
pub fn find<'a>(
    scope: ElementRef<'a>,
    css: &'static str,
) -> Result<Option<ElementRef<'a>>, ExtractError> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).next())
}

/// First descendant of `scope` matching `css`, or [`ExtractError::MissingElement`].
pub fn require<'a>(
    scope: ElementRef<'a>,
    css: &'static str,
) -> Result<ElementRef<'a>, ExtractError> {
    find(scope, css)?.ok_or(ExtractError::MissingElement { selector: css })
}

/// Every descendant of `scope` matching `css`, in document order.
pub fn find_all<'a>(
    scope: ElementRef<'a>,
    css: &'static str,
) -> Result<Vec<ElementRef<'a>>, ExtractError> {
    let sel = selector(css)?;
    Ok(scope.select(&sel).collect())
}

pub fn attr<'a>(
    el: ElementRef<'a>,
    selector: &'static str,
    attribute: &'static str,
) -> Result<&'a str, ExtractError> {
    el.value()
        .attr(attribute)
        .ok_or(ExtractError::MissingAttribute { selector, attribute })
}

/// All descendant text, concatenated.
pub fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn trimmed_text(el: ElementRef<'_>) -> String {
    text(el).trim().to_string()
}

/// The `index`-th `/`-separated segment of a link target.
pub fn path_segment(href: &str, index: usize) -> Result<&str, ExtractError> {
    href.split('/')
        .nth(index)
        .ok_or_else(|| ExtractError::Malformed {
            field: "href",
            value: href.to_string(),
        })
}
