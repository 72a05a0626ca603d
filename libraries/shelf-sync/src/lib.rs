//! Shelf Sync
//!
//! Keeps in-memory mirrors of the wishlist, in-progress and finished
//! collections in step with the record store, and moves books between them.
//!
//! # Example
//!
//! ```ignore
//! use shelf_sync::{init_tracing, Shelf, ShelfConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ShelfConfig::load("shelf.toml")?;
//!     init_tracing(&config.logging.filter)?;
//!
//!     let mut shelf = Shelf::connect(&config)?;
//!     shelf.load_all().await;
//!
//!     shelf.search("Dune").await;
//!     let record = shelf.start_reading(0, Some(412), 0).await?;
//!     shelf.finish_reading(&record.id, true).await?;
//!
//!     Ok(())
//! }
//! ```

mod config;
mod controller;
mod error;
mod logging;
mod progress;
mod review;
mod shelf;
mod state;
mod transfer;
mod types;

// Public exports
pub use config::{CatalogSettings, LoggingSettings, ShelfConfig, StoreSettings};
pub use controller::{
    CollectionController, CollectionKind, Finished, FinishedController, InProgress,
    ReadingController, Wishlist, WishlistController,
};
pub use error::{Result, SyncError};
pub use logging::init_tracing;
pub use shelf::Shelf;
pub use transfer::{complete_interrupted_move, find_duplicates, move_to_finished, Duplicate};
pub use types::{Activity, LoadState, MutationKind, ReviewDraft, Target};
