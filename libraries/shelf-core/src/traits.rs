/// Core traits for Shelf
use crate::error::Result;
use crate::types::{BookDetails, BookRecord, Candidate, Collection, RecordId, RecordPatch};
use async_trait::async_trait;

/// Remote list-of-records store
///
/// Three independent collections live behind one store. Every method is a
/// single round-trip and returns what the store persisted; nothing is cached
/// by implementers.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch every record of a collection, in store order
    async fn list(&self, collection: Collection) -> Result<Vec<BookRecord>>;

    /// Persist a new record and return it with its store-assigned id
    async fn create(&self, collection: Collection, details: &BookDetails) -> Result<BookRecord>;

    /// Apply a partial update
    ///
    /// Returns `None` when the store acknowledged the update without echoing
    /// the record back.
    async fn update(
        &self,
        collection: Collection,
        id: &RecordId,
        patch: &RecordPatch,
    ) -> Result<Option<BookRecord>>;

    /// Delete a record
    async fn delete(&self, collection: Collection, id: &RecordId) -> Result<()>;
}

/// External book catalog
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Free-text search
    ///
    /// Blank queries return nothing without contacting the catalog. Failures
    /// are reported as an empty result.
    async fn search(&self, query: &str) -> Vec<Candidate>;
}
