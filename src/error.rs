use thiserror::Error;

/// Failure to retrieve a page body.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// A page did not have the shape a section expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no element matches `{selector}`")]
    MissingElement { selector: &'static str },
    #[error("element `{selector}` has no `{attribute}` attribute")]
    MissingAttribute {
        selector: &'static str,
        attribute: &'static str,
    },
    #[error("unexpected {field} value: {value:?}")]
    Malformed { field: &'static str, value: String },
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector {
        selector: &'static str,
        reason: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserAgentError {
    #[error("user agent pool is empty")]
    EmptyPool,
    #[error("user agent source returned a blank value")]
    Blank,
}
