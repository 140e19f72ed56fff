// src/error.rs
// =============================================================================
// Every failure the pipeline can report, as one typed enum.
//
// main.rs wraps these in anyhow for printing, but everything below main
// returns this Result so callers can tell a missing cookie apart from a
// bad HTTP status or a malformed API record.
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No --cookie flag and nothing usable in the cookie file
    #[error("no --cookie provided and {} not found or empty", .path.display())]
    MissingCookie { path: PathBuf },

    #[error("unknown highlighting theme '{name}' (available: {})", .available.join(", "))]
    UnknownTheme { name: String, available: Vec<String> },

    #[error("{name} header value contains characters HTTP does not allow")]
    InvalidHeader { name: &'static str },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The response body did not match the record we expected
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("sections {first} and {second} both claim page {page}")]
    DuplicatePage { page: u32, first: u64, second: u64 },

    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Shorthand for tagging an io::Error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
