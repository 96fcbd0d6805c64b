// src/error.rs
//
// Hard failures only. A page that could not be fetched is not an error here:
// `Fetch::fetch` returns `None` and the caller skips that unit of work.

use std::fmt;

/// Attribute filter as it appeared in a failed lookup, for the error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDesc(pub Vec<String>);

impl fmt::Display for FilterDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        write!(f, " [{}]", self.0.join(", "))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Expected markup is missing; the page layout changed.
    #[error("tag not found: <{tag}>{filters}")]
    TagNotFound { tag: String, filters: FilterDesc },

    /// Index abbreviation outside the known vocabulary.
    #[error("unknown status abbreviation {0:?}")]
    UnknownAbbreviation(String),

    #[error("nothing found: {0}")]
    NothingFound(String),

    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
