//! Moving a book from the in-progress shelf to the finished shelf.
//!
//! The store has no move endpoint, so a move is two writes: create the
//! finished record, then delete the in-progress one. If the delete fails the
//! book is left on both shelves. That window is reported as
//! `SyncError::PartialMove` and not repaired automatically; `find_duplicates`
//! and `complete_interrupted_move` are the manual way out.

use crate::controller::{FinishedController, ReadingController};
use crate::error::{Result, SyncError};
use crate::types::{MutationKind, Target};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shelf_core::{BookRecord, Collection, RecordId, RecordStore};
use tracing::{info, warn};

/// A book present on both the in-progress and finished shelves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duplicate {
    pub in_progress: RecordId,
    pub finished: RecordId,
    pub title: String,
}

/// Record `id` as finished on `date` and take it off the in-progress shelf.
///
/// Without `confirmed` nothing happens. If creating the finished record
/// fails, nothing else is attempted. If removing the in-progress record
/// fails, the finished record stays (locally and in the store) and the
/// in-progress mirror is unchanged.
pub async fn move_to_finished<S>(
    reading: &mut ReadingController<S>,
    finished: &mut FinishedController<S>,
    id: &RecordId,
    confirmed: bool,
    date: NaiveDate,
) -> Result<BookRecord>
where
    S: RecordStore,
{
    if !confirmed {
        return Err(SyncError::NotConfirmed);
    }

    let original = reading
        .get(id)
        .cloned()
        .ok_or_else(|| SyncError::UnknownRecord {
            collection: Collection::InProgress,
            id: id.clone(),
        })?;

    let _busy = reading
        .tracker()
        .mutating(Target::Record(id.clone()), MutationKind::Move);

    let created = finished.add(original.to_finished(date)).await?;

    if let Err(e) = reading.store().delete(Collection::InProgress, id).await {
        warn!(
            id = %id,
            finished_id = %created.id,
            title = %created.details.title,
            error = %e,
            "Book is now on both shelves"
        );
        return Err(SyncError::PartialMove {
            original: id.clone(),
            created: Box::new(created),
            source: e,
        });
    }

    reading.forget(id);
    info!(
        id = %id,
        finished_id = %created.id,
        title = %created.details.title,
        date_finished = %date,
        "Moved book to finished"
    );
    Ok(created)
}

/// In-progress records that also appear on the finished shelf.
pub fn find_duplicates<S>(
    reading: &ReadingController<S>,
    finished: &FinishedController<S>,
) -> Vec<Duplicate>
where
    S: RecordStore,
{
    reading
        .items()
        .iter()
        .filter_map(|r| {
            finished
                .items()
                .iter()
                .find(|f| f.details.same_book(&r.details))
                .map(|f| Duplicate {
                    in_progress: r.id.clone(),
                    finished: f.id.clone(),
                    title: r.details.title.clone(),
                })
        })
        .collect()
}

/// Finish a move whose removal step failed by removing the in-progress copy.
///
/// Refused unless the finished shelf holds the same book.
pub async fn complete_interrupted_move<S>(
    reading: &mut ReadingController<S>,
    finished: &FinishedController<S>,
    id: &RecordId,
    confirmed: bool,
) -> Result<BookRecord>
where
    S: RecordStore,
{
    let record = reading.get(id).ok_or_else(|| SyncError::UnknownRecord {
        collection: Collection::InProgress,
        id: id.clone(),
    })?;

    if !finished
        .items()
        .iter()
        .any(|f| f.details.same_book(&record.details))
    {
        return Err(SyncError::NotFinished(id.clone()));
    }

    reading.remove(id, confirmed).await
}
