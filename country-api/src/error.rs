use thiserror::Error;

/// Errors returned by the country API client.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured base URL could not be parsed or cannot carry path segments.
    #[error("Invalid country API base URL: {0}")]
    InvalidBaseUrl(String),
    /// The upstream answered 404 (or 400, which it uses for codes it cannot parse).
    #[error("Country API resource not found: {url}")]
    NotFound { url: String },
    /// The request did not complete within the configured timeout.
    #[error("Country API request timed out: {url}")]
    Timeout { url: String },
    /// The upstream answered with a status other than success or not found.
    #[error("Country API returned status {status} for {url}")]
    Status { status: u16, url: String },
    /// The upstream answered 200 with a body that is not a country payload.
    #[error("Failed to decode country API response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// Connection, TLS or protocol failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Whether the error means the requested resource does not exist upstream.
    ///
    /// Every other variant means the upstream could not be used to answer the question.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
