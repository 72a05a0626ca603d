//! Bookmark editing for the in-progress shelf.
//!
//! Edits land in memory on every keystroke and only reach the store on an
//! explicit save. There is no autosave.

use crate::controller::ReadingController;
use crate::error::Result;
use shelf_core::{BookRecord, Candidate, RecordId, RecordPatch, RecordStore};
use tracing::debug;

impl<S> ReadingController<S>
where
    S: RecordStore,
{
    /// Start reading a catalog hit.
    ///
    /// `page_count` and `pages_read` are what the reader entered; the
    /// catalog's own page count is only a suggestion for that prompt.
    pub async fn add_from_candidate(
        &mut self,
        candidate: &Candidate,
        page_count: Option<u32>,
        pages_read: u32,
    ) -> Result<BookRecord> {
        let details = candidate
            .to_details()
            .with_thumbnail(candidate.secure_thumbnail())
            .with_page_count(page_count)
            .with_pages_read(pages_read);
        self.add(details).await
    }

    /// Move the bookmark locally. Not sent until `save_progress`.
    pub fn set_pages_read(&mut self, id: &RecordId, pages_read: u32) -> Result<()> {
        let record = self.record_mut(id)?;
        record.details.pages_read = pages_read;
        debug!(id = %id, pages_read, "Edited bookmark");
        Ok(())
    }

    /// Change the page count locally. Not sent until `save_progress`.
    pub fn set_page_count(&mut self, id: &RecordId, page_count: Option<u32>) -> Result<()> {
        let record = self.record_mut(id)?;
        record.details.page_count = page_count;
        debug!(id = %id, page_count = ?page_count, "Edited page count");
        Ok(())
    }

    /// Send the local bookmark and page count and adopt the stored record.
    ///
    /// On failure the local edits stay in memory, unsaved.
    pub async fn save_progress(&mut self, id: &RecordId) -> Result<BookRecord> {
        let details = &self.record_mut(id)?.details;
        let patch = RecordPatch::progress(details.pages_read, details.page_count);
        self.update(id, patch).await
    }
}
