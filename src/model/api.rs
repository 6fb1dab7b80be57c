use serde::{Deserialize, Serialize};

/// Category of an API error, stable across releases so clients can branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum ErrorKind {
    /// Unknown country code or route
    NotFound,
    /// The external country data source failed or timed out
    UpstreamUnavailable,
    /// Missing, expired or invalid session
    Unauthorized,
    /// Malformed request parameters
    ValidationError,
    /// The request conflicts with existing state, e.g. an email already registered
    Conflict,
    /// Anything else, details are only logged server-side
    InternalError,
}

/// The response when an error occurs with an API request
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error category
    pub kind: ErrorKind,
    /// The error message
    pub error: String,
}

/// Plain acknowledgement body
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MessageDto {
    pub message: String,
}
