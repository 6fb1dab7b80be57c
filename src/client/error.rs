use thiserror::Error;

use crate::model::{api::ErrorKind, input::ValidationError};

/// Errors returned by the client state layer.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with an error body.
    #[error("{message}")]
    Api {
        status: u16,
        kind: ErrorKind,
        message: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },
    /// Connection, TLS or protocol failure.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered successfully with a body the client doesn't understand.
    #[error("Unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },
    #[error("Invalid server URL: {0}")]
    InvalidBaseUrl(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Local persistence failures.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage key {0:?} may only contain ASCII letters, digits, '-' and '_'")]
    InvalidKey(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

impl ClientError {
    /// Error category reported by the server, if the server answered.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == Some(ErrorKind::Unauthorized)
    }

    /// Whether the server may have applied the request despite the error.
    ///
    /// True for lost or timed out requests, server-side failures and unreadable success
    /// responses. False when the server explicitly rejected the request or it was
    /// never sent.
    pub fn is_ambiguous(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status >= 500,
            Self::Timeout { .. } | Self::Transport { .. } | Self::Decode { .. } => true,
            Self::InvalidBaseUrl(_) | Self::Validation(_) | Self::Storage(_) => false,
        }
    }
}

/// Best guess at the error category when the server's error body is unreadable.
pub(crate) fn kind_for_status(status: u16) -> ErrorKind {
    match status {
        400 | 422 => ErrorKind::ValidationError,
        401 | 403 => ErrorKind::Unauthorized,
        404 => ErrorKind::NotFound,
        409 => ErrorKind::Conflict,
        502..=504 => ErrorKind::UpstreamUnavailable,
        _ => ErrorKind::InternalError,
    }
}
