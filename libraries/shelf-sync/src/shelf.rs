//! The three shelves and the catalog search page, wired together.

use crate::config::ShelfConfig;
use crate::controller::{FinishedController, ReadingController, WishlistController};
use crate::error::{Result, SyncError};
use crate::transfer;
use chrono::{NaiveDate, Utc};
use shelf_client::{CatalogClient, RecordStoreClient, ShelfClient};
use shelf_core::{BookRecord, Candidate, Catalog, RecordId, RecordStore, ShelfError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One reader's shelves over a shared store, plus the current search page.
///
/// The search page holds a single page of catalog hits. Adding a hit to a
/// shelf clears it.
#[derive(Debug)]
pub struct Shelf<S, C> {
    pub wishlist: WishlistController<S>,
    pub reading: ReadingController<S>,
    pub finished: FinishedController<S>,
    catalog: C,
    results: Vec<Candidate>,
}

impl Shelf<RecordStoreClient, CatalogClient> {
    /// Build the HTTP-backed shelf described by `config`.
    pub fn connect(config: &ShelfConfig) -> Result<Self> {
        config.validate()?;

        let client = ShelfClient::new(config.client_config()).map_err(ShelfError::from)?;
        info!(store = %client.store_url(), "Connected shelf");

        Ok(Self::new(Arc::new(client.store()), client.catalog()))
    }
}

impl<S, C> Shelf<S, C>
where
    S: RecordStore,
    C: Catalog,
{
    pub fn new(store: Arc<S>, catalog: C) -> Self {
        Self {
            wishlist: WishlistController::new(Arc::clone(&store)),
            reading: ReadingController::new(Arc::clone(&store)),
            finished: FinishedController::new(store),
            catalog,
            results: Vec::new(),
        }
    }

    /// Fetch all three collections.
    ///
    /// A collection that fails to load is left empty with
    /// `LoadState::Failed`; the others still load.
    pub async fn load_all(&mut self) {
        let (wishlist, reading, finished) = tokio::join!(
            self.wishlist.fetch_all(),
            self.reading.fetch_all(),
            self.finished.fetch_all(),
        );

        let failed = [wishlist.is_err(), reading.is_err(), finished.is_err()]
            .iter()
            .filter(|failed| **failed)
            .count();
        if failed > 0 {
            warn!(failed, "Some collections did not load");
        }
    }

    /// Replace the search page with the catalog's hits for `query`.
    ///
    /// A blank query leaves the current page as it is.
    pub async fn search(&mut self, query: &str) -> &[Candidate] {
        if query.trim().is_empty() {
            return &self.results;
        }

        self.results = self.catalog.search(query).await;
        debug!(query = %query, results = self.results.len(), "Searched catalog");
        &self.results
    }

    /// The current search page.
    pub fn results(&self) -> &[Candidate] {
        &self.results
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    /// Put search hit `index` on the wishlist.
    pub async fn add_to_wishlist(&mut self, index: usize) -> Result<BookRecord> {
        let candidate = self.candidate(index)?;
        let record = self.wishlist.add_candidate(&candidate).await?;
        self.results.clear();
        Ok(record)
    }

    /// Start reading search hit `index` with the page count and bookmark the
    /// reader entered.
    pub async fn start_reading(
        &mut self,
        index: usize,
        page_count: Option<u32>,
        pages_read: u32,
    ) -> Result<BookRecord> {
        let candidate = self.candidate(index)?;
        let record = self
            .reading
            .add_from_candidate(&candidate, page_count, pages_read)
            .await?;
        self.results.clear();
        Ok(record)
    }

    /// Move an in-progress book to the finished shelf, dated today (UTC).
    pub async fn finish_reading(&mut self, id: &RecordId, confirmed: bool) -> Result<BookRecord> {
        self.finish_reading_on(id, confirmed, Utc::now().date_naive())
            .await
    }

    /// Move an in-progress book to the finished shelf, dated `date`.
    pub async fn finish_reading_on(
        &mut self,
        id: &RecordId,
        confirmed: bool,
        date: NaiveDate,
    ) -> Result<BookRecord> {
        transfer::move_to_finished(&mut self.reading, &mut self.finished, id, confirmed, date).await
    }

    /// Books left on both the in-progress and finished shelves.
    pub fn duplicates(&self) -> Vec<transfer::Duplicate> {
        transfer::find_duplicates(&self.reading, &self.finished)
    }

    /// Remove the in-progress copy of a book that already made it to finished.
    pub async fn complete_interrupted_move(
        &mut self,
        id: &RecordId,
        confirmed: bool,
    ) -> Result<BookRecord> {
        transfer::complete_interrupted_move(&mut self.reading, &self.finished, id, confirmed).await
    }

    fn candidate(&self, index: usize) -> Result<Candidate> {
        self.results
            .get(index)
            .cloned()
            .ok_or(SyncError::NoSuchCandidate(index))
    }
}
