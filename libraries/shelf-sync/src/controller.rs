//! Local mirror of one remote collection.

use crate::error::{Result, SyncError};
use crate::state::ActivityTracker;
use crate::types::{Activity, LoadState, MutationKind, ReviewDraft, Target};
use shelf_core::{BookDetails, BookRecord, Collection, RecordId, RecordPatch, RecordStore};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Compile-time tag naming which collection a controller mirrors.
///
/// Kinds may carry per-collection UI state (the finished shelf keeps its
/// review edit slot here).
pub trait CollectionKind: Default + Send + Sync + 'static {
    const COLLECTION: Collection;

    /// Called after `id` left the local mirror.
    fn record_removed(&mut self, _id: &RecordId) {}

    /// Called after the whole mirror was replaced by `items`.
    fn records_replaced(&mut self, _items: &[BookRecord]) {}
}

/// Books the reader wants to read.
#[derive(Debug, Default)]
pub struct Wishlist;

/// Books being read.
#[derive(Debug, Default)]
pub struct InProgress;

/// Books read.
#[derive(Debug, Default)]
pub struct Finished {
    pub(crate) edit: Option<ReviewDraft>,
}

impl CollectionKind for Wishlist {
    const COLLECTION: Collection = Collection::Wishlist;
}

impl CollectionKind for InProgress {
    const COLLECTION: Collection = Collection::InProgress;
}

impl CollectionKind for Finished {
    const COLLECTION: Collection = Collection::Finished;

    fn record_removed(&mut self, id: &RecordId) {
        if self.edit.as_ref().is_some_and(|draft| &draft.target == id) {
            self.edit = None;
        }
    }

    fn records_replaced(&mut self, items: &[BookRecord]) {
        if let Some(draft) = &self.edit {
            if !items.iter().any(|r| r.id == draft.target) {
                self.edit = None;
            }
        }
    }
}

pub type WishlistController<S> = CollectionController<S, Wishlist>;
pub type ReadingController<S> = CollectionController<S, InProgress>;
pub type FinishedController<S> = CollectionController<S, Finished>;

/// Mirrors one remote collection in memory.
///
/// Every mutation goes to the store first; the mirror only changes once the
/// store has answered, and then takes the store's answer as the truth. A
/// failed call leaves the mirror as it was. Operations take `&mut self`, so
/// at most one is outstanding per controller and the published `Activity`
/// always describes it.
pub struct CollectionController<S, K> {
    store: Arc<S>,
    items: Vec<BookRecord>,
    load: LoadState,
    activity: ActivityTracker,
    pub(crate) kind: K,
}

impl<S, K> fmt::Debug for CollectionController<S, K>
where
    K: CollectionKind + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionController")
            .field("collection", &K::COLLECTION)
            .field("items", &self.items.len())
            .field("load", &self.load)
            .field("activity", &self.activity.current())
            .field("kind", &self.kind)
            .finish()
    }
}

impl<S, K> CollectionController<S, K>
where
    S: RecordStore,
    K: CollectionKind,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            items: Vec::new(),
            load: LoadState::NotLoaded,
            activity: ActivityTracker::new(),
            kind: K::default(),
        }
    }

    pub fn collection(&self) -> Collection {
        K::COLLECTION
    }

    pub fn items(&self) -> &[BookRecord] {
        &self.items
    }

    pub fn get(&self, id: &RecordId) -> Option<&BookRecord> {
        self.items.iter().find(|r| &r.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains_external_id(&self, external_id: &str) -> bool {
        self.items
            .iter()
            .any(|r| r.details.external_id.as_deref() == Some(external_id))
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn activity(&self) -> Activity {
        self.activity.current()
    }

    /// Watch the in-flight marker, e.g. to disable a button while saving.
    pub fn subscribe(&self) -> watch::Receiver<Activity> {
        self.activity.subscribe()
    }

    /// Replace the mirror with the store's current contents.
    ///
    /// On failure the mirror is emptied and `LoadState::Failed` recorded.
    pub async fn fetch_all(&mut self) -> Result<&[BookRecord]> {
        let collection = K::COLLECTION;
        let _busy = self.activity.begin(Activity::Fetching);

        match self.store.list(collection).await {
            Ok(records) => {
                info!(collection = %collection, records = records.len(), "Loaded collection");
                self.items = records;
                self.kind.records_replaced(&self.items);
                self.load = LoadState::Loaded;
                Ok(&self.items)
            }
            Err(e) => {
                warn!(collection = %collection, error = %e, "Failed to load collection");
                self.items.clear();
                self.kind.records_replaced(&self.items);
                self.load = LoadState::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Persist a new record and append what the store returned.
    ///
    /// The wishlist refuses a second record for the same catalog id without
    /// contacting the store.
    pub async fn add(&mut self, details: BookDetails) -> Result<BookRecord> {
        let collection = K::COLLECTION;

        if collection.enforces_unique_external_id() {
            if let Some(external_id) = details.external_id.as_deref() {
                if self.contains_external_id(external_id) {
                    debug!(collection = %collection, external_id = %external_id, "Rejected duplicate");
                    return Err(SyncError::Duplicate {
                        collection,
                        title: details.title,
                    });
                }
            }
        }

        let _busy = self.activity.mutating(
            Target::Pending(details.external_id.clone()),
            MutationKind::Add,
        );

        let record = self.store.create(collection, &details).await?;
        info!(collection = %collection, id = %record.id, title = %record.details.title, "Added record");

        self.items.push(record.clone());
        Ok(record)
    }

    /// Send a partial update and adopt the store's version of the record.
    ///
    /// If the store acknowledges without echoing the record, the patch is
    /// merged into the local copy instead.
    pub async fn update(&mut self, id: &RecordId, patch: RecordPatch) -> Result<BookRecord> {
        let collection = K::COLLECTION;
        let index = self.index_of(id)?;
        let _busy = self
            .activity
            .mutating(Target::Record(id.clone()), MutationKind::Update);

        let response = self.store.update(collection, id, &patch).await?;

        let slot = &mut self.items[index];
        match response {
            Some(record) => *slot = record,
            None => {
                debug!(collection = %collection, id = %id, "Store sent no body, merging locally");
                patch.apply_to(&mut slot.details);
            }
        }
        debug!(collection = %collection, id = %id, "Updated record");
        Ok(slot.clone())
    }

    /// Delete a record. Nothing happens without `confirmed`.
    pub async fn remove(&mut self, id: &RecordId, confirmed: bool) -> Result<BookRecord> {
        if !confirmed {
            return Err(SyncError::NotConfirmed);
        }

        let collection = K::COLLECTION;
        let index = self.index_of(id)?;
        let _busy = self
            .activity
            .mutating(Target::Record(id.clone()), MutationKind::Remove);

        self.store.delete(collection, id).await?;

        let removed = self.items.remove(index);
        self.kind.record_removed(id);
        info!(collection = %collection, id = %id, title = %removed.details.title, "Removed record");
        Ok(removed)
    }

    pub(crate) fn index_of(&self, id: &RecordId) -> Result<usize> {
        self.items
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| SyncError::UnknownRecord {
                collection: K::COLLECTION,
                id: id.clone(),
            })
    }

    pub(crate) fn record_mut(&mut self, id: &RecordId) -> Result<&mut BookRecord> {
        let index = self.index_of(id)?;
        Ok(&mut self.items[index])
    }

    pub(crate) fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub(crate) fn tracker(&self) -> &ActivityTracker {
        &self.activity
    }

    /// Take a record out of the mirror without contacting the store.
    pub(crate) fn forget(&mut self, id: &RecordId) -> Option<BookRecord> {
        let index = self.items.iter().position(|r| &r.id == id)?;
        self.kind.record_removed(id);
        Some(self.items.remove(index))
    }
}

impl<S> WishlistController<S>
where
    S: RecordStore,
{
    /// Add a catalog hit as it is.
    pub async fn add_candidate(&mut self, candidate: &shelf_core::Candidate) -> Result<BookRecord> {
        self.add(candidate.to_details()).await
    }
}
