//! Shelf Core
//!
//! Platform-agnostic domain types, traits, and error handling for Shelf, a
//! personal book tracker.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `BookRecord`, `BookDetails`, `Candidate`, `RecordPatch`
//! - **Core Traits**: `RecordStore` (remote collections) and `Catalog` (book search)
//! - **Error Handling**: Unified `ShelfError` and `Result` types
//!
//! Nothing in here performs I/O. HTTP implementations of the traits live in
//! `shelf-client`; the local mirrors built on top of them live in `shelf-sync`.
//!
//! # Example
//!
//! ```rust
//! use shelf_core::{BookDetails, Collection, RecordPatch};
//!
//! let details = BookDetails::new("Dune")
//!     .with_authors(["Frank Herbert"])
//!     .with_page_count(Some(412));
//!
//! assert_eq!(Collection::InProgress.default_path(), "inprogress");
//! assert!(!RecordPatch::pages_read(120).is_empty());
//! # let _ = details;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Error types
pub mod error;
/// Store and catalog traits
pub mod traits;
/// Domain types
pub mod types;

// Re-export commonly used types
pub use error::{Result, ShelfError};
pub use traits::{Catalog, RecordStore};

pub use types::{BookDetails, BookRecord, Candidate, Collection, RecordId, RecordPatch};
