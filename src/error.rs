//! Error type raised while reading the query string of a URL.

/// Why a query string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// A `&`-separated field has no `=` (this includes the empty fields
    /// produced by `&&` or a leading/trailing `&`).
    #[error("bad query field: '{field}'")]
    BadField { field: String },

    /// A `%` is not followed by two hex digits.
    #[error("invalid percent-encoding in field: '{field}'")]
    InvalidEscape { field: String },

    /// The percent-decoded bytes are not valid UTF-8.
    #[error("field does not decode to UTF-8: '{field}'")]
    InvalidUtf8 { field: String },

    /// The query parsed fine but lacks a required key.
    #[error("missing query parameter '{key}'")]
    MissingParameter { key: String },
}

/// Failure to parse, or to find an expected key in, the query of `url`.
///
/// Both the full URL and the raw query substring are kept so callers can
/// show the user exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error parsing query '{url_query}' of '{url}': {kind}")]
pub struct QueryStringParsingError {
    url: String,
    url_query: String,
    kind: ParseErrorKind,
}

impl QueryStringParsingError {
    pub fn new(url: impl Into<String>, url_query: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            url: url.into(),
            url_query: url_query.into(),
            kind,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn url_query(&self) -> &str {
        &self.url_query
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

pub type UnwrapResult<T> = std::result::Result<T, QueryStringParsingError>;
