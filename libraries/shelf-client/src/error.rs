//! Error types for the Shelf HTTP clients.

use shelf_core::ShelfError;
use thiserror::Error;

/// Errors that can occur when talking to the record store or the catalog.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Record does not exist in the addressed collection
    #[error("{collection} record not found: {id}")]
    NotFound { collection: String, id: String },

    /// Invalid base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    /// Classify a transport error the way callers care about it.
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::ServerUnreachable(err.to_string())
        } else {
            Self::Request(err)
        }
    }
}

impl From<ClientError> for ShelfError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => ShelfError::Network(e.to_string()),
            ClientError::ServerUnreachable(msg) => ShelfError::Network(msg),
            ClientError::ServerError { status, message } => ShelfError::Server { status, message },
            ClientError::NotFound { collection, id } => ShelfError::NotFound { collection, id },
            ClientError::InvalidUrl(msg) => ShelfError::InvalidUrl(msg),
            ClientError::ParseError(msg) => ShelfError::Parse(msg),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
