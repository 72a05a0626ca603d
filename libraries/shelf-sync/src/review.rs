//! Review editing for the finished shelf.
//!
//! One record at a time can be in edit mode. Opening a second one is refused
//! until the first is saved or cancelled.

use crate::controller::FinishedController;
use crate::error::{Result, SyncError};
use crate::types::ReviewDraft;
use shelf_core::{BookRecord, RecordId, RecordPatch, RecordStore};
use tracing::{debug, warn};

impl<S> FinishedController<S>
where
    S: RecordStore,
{
    /// The draft being edited, if any.
    pub fn editing(&self) -> Option<&ReviewDraft> {
        self.kind.edit.as_ref()
    }

    /// Open edit mode for `id`, seeded with its current review.
    ///
    /// Re-opening the record already in edit mode keeps its draft.
    pub fn begin_review(&mut self, id: &RecordId) -> Result<&ReviewDraft> {
        let draft = match self.kind.edit.take() {
            Some(draft) if &draft.target != id => {
                let target = draft.target.clone();
                self.kind.edit = Some(draft);
                return Err(SyncError::EditInProgress(target));
            }
            Some(draft) => draft,
            None => {
                let review = self
                    .get(id)
                    .map(|r| r.details.review.clone())
                    .ok_or_else(|| SyncError::UnknownRecord {
                        collection: self.collection(),
                        id: id.clone(),
                    })?;
                debug!(id = %id, "Editing review");
                ReviewDraft {
                    target: id.clone(),
                    text: review,
                }
            }
        };

        Ok(&*self.kind.edit.insert(draft))
    }

    /// Replace the draft text of the record in edit mode.
    pub fn set_review_draft(&mut self, id: &RecordId, text: impl Into<String>) -> Result<()> {
        match &mut self.kind.edit {
            Some(draft) if &draft.target == id => {
                draft.text = text.into();
                Ok(())
            }
            _ => Err(SyncError::NotEditing(id.clone())),
        }
    }

    /// Leave edit mode, discarding the draft.
    pub fn cancel_review(&mut self) -> Option<ReviewDraft> {
        self.kind.edit.take()
    }

    /// Save the trimmed draft as the review of `id`.
    ///
    /// Edit mode ends only when the store accepted the review; after a
    /// failure the draft is still there to retry.
    pub async fn save_review(&mut self, id: &RecordId) -> Result<BookRecord> {
        let text = match &self.kind.edit {
            Some(draft) if &draft.target == id => draft.text.trim().to_string(),
            _ => return Err(SyncError::NotEditing(id.clone())),
        };

        match self.update(id, RecordPatch::review(text)).await {
            Ok(record) => {
                self.kind.edit = None;
                Ok(record)
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Saving review failed, draft kept");
                Err(e)
            }
        }
    }
}
