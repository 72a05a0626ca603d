//! Shelf Client
//!
//! HTTP implementations of the `shelf-core` traits.
//!
//! # Features
//!
//! - **Record store**: list/create/patch/delete against the three collection endpoints
//! - **Catalog**: free-text book search against a Google Books style endpoint
//!
//! # Example
//!
//! ```ignore
//! use shelf_client::{ClientConfig, ShelfClient};
//! use shelf_core::{Catalog, Collection, RecordStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ShelfClient::new(ClientConfig::new("http://localhost:3000"))?;
//!
//!     // Search the catalog
//!     let candidates = client.catalog().search("Dune").await;
//!     println!("Found {} candidates", candidates.len());
//!
//!     // Read a collection
//!     let reading = client.store().list(Collection::InProgress).await?;
//!     println!("Reading {} books", reading.len());
//!
//!     Ok(())
//! }
//! ```

mod catalog;
mod client;
mod error;
mod store;
mod types;

// Re-export main types
pub use client::ShelfClient;
pub use error::{ClientError, Result};
pub use types::{ClientConfig, CollectionPaths, DEFAULT_CATALOG_URL, DEFAULT_PAGE_SIZE};

// Re-export sub-clients for direct use if needed
pub use catalog::CatalogClient;
pub use store::RecordStoreClient;
