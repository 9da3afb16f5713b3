use ::scraper::error::SelectorErrorKind;
use std::path::PathBuf;

/// All errors that can occur while scraping and exporting map stats.
#[derive(thiserror::Error, Debug)]
pub enum SurfError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a status other than 200 OK.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The response body could not be queried as an HTML document.
    #[error("failed to parse HTML from {url}")]
    Parse { url: String },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// The output file could not be created.
    #[error("failed to create {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing or flushing a CSV row failed.
    #[error("failed to write CSV to {target}: {source}")]
    Csv { target: String, source: csv::Error },
}

impl<'a> From<SelectorErrorKind<'a>> for SurfError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        SurfError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SurfError>;
