use shelf_core::{BookRecord, Collection, RecordId, ShelfError};
use thiserror::Error;

/// Errors that can occur while keeping the local mirrors in step with the store
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Store error: {0}")]
    Store(#[from] ShelfError),

    #[error("\"{title}\" is already in the {collection}")]
    Duplicate { collection: Collection, title: String },

    #[error("Operation was not confirmed")]
    NotConfirmed,

    #[error("No {collection} record with id {id}")]
    UnknownRecord { collection: Collection, id: RecordId },

    #[error("Record {0} is already being edited")]
    EditInProgress(RecordId),

    #[error("Record {0} is not being edited")]
    NotEditing(RecordId),

    #[error("No search result at position {0}")]
    NoSuchCandidate(usize),

    #[error("Record {0} has no finished counterpart")]
    NotFinished(RecordId),

    #[error("Record {original} was added to finished but is still in progress: {source}")]
    PartialMove {
        original: RecordId,
        created: Box<BookRecord>,
        source: ShelfError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SyncError {
    /// True when the operation was refused before anything was sent.
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::Store(_) | Self::PartialMove { .. })
    }

    /// One-line message for the reader. Every failure kind reads the same
    /// way apart from the ones the reader can act on.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Duplicate { collection, .. } => match collection {
                Collection::Wishlist => "Already in wishlist",
                _ => "Already on this shelf",
            },
            Self::NotConfirmed => "Cancelled",
            Self::PartialMove { .. } => {
                "Could not finish moving the book. It now appears in both lists."
            }
            _ => "Operation failed. Please try again.",
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
