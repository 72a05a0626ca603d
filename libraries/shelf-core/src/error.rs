/// Core error types for Shelf
use thiserror::Error;

/// Result type alias using `ShelfError`
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf
///
/// Every failure a `RecordStore` or `Catalog` implementation can report
/// collapses into one of these variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShelfError {
    /// Transport-level failure (connection refused, reset, timed out)
    #[error("Network error: {0}")]
    Network(String),

    /// The remote service answered with a non-success status
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// The response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A base URL could not be used
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The addressed record does not exist remotely
    #[error("{collection} record not found: {id}")]
    NotFound {
        /// Collection the record was looked up in
        collection: String,
        /// Record identifier
        id: String,
    },
}

impl ShelfError {
    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a not found error
    pub fn not_found(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection: collection.into(),
            id: id.into(),
        }
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
