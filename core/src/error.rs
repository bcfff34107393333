//! Error types for the items API client.
//!
//! # Design
//! `NotFound` gets its own variant since callers usually treat "no such
//! item" differently from an unexpected status. Every other non-2xx response
//! lands in `Http` with the raw status and body.

/// Errors returned by `ItemsClient` parse methods and `ApiClient` calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server returned 404: the item does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request never produced a response (connection refused, reset, ...).
    #[error("transport failed: {0}")]
    Transport(#[from] reqwest::Error),
}
