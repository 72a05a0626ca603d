//! Shared helpers for shelf-sync integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use shelf_core::{
    BookDetails, BookRecord, Collection, RecordId, RecordPatch, RecordStore, ShelfError,
};
use std::collections::HashMap;
use shelf_sync::Activity;
use std::sync::{Mutex, Once};
use tokio::sync::watch;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Store operation a `MemoryStore` can be told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

/// Record store held in memory, with per-operation failure injection
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<Collection, Vec<BookRecord>>>,
    failing: Mutex<Vec<(Collection, Op)>>,
    calls: Mutex<Vec<(Collection, Op)>>,
    observer: Mutex<Option<watch::Receiver<Activity>>>,
    seen: Mutex<Vec<Activity>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a collection without going through `create`.
    pub fn insert(&self, collection: Collection, details: BookDetails) -> BookRecord {
        let record = BookRecord::new(RecordId::new(uuid::Uuid::new_v4().to_string()), details);
        self.records
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .push(record.clone());
        record
    }

    pub fn fail(&self, collection: Collection, op: Op) {
        self.failing.lock().unwrap().push((collection, op));
    }

    pub fn heal(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn records(&self, collection: Collection) -> Vec<BookRecord> {
        self.records
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn calls(&self, collection: Collection, op: Op) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| **call == (collection, op))
            .count()
    }

    /// Record the controller activity visible at the start of every call.
    pub fn observe(&self, rx: watch::Receiver<Activity>) {
        *self.observer.lock().unwrap() = Some(rx);
    }

    pub fn seen(&self) -> Vec<Activity> {
        self.seen.lock().unwrap().clone()
    }

    fn enter(&self, collection: Collection, op: Op) -> Result<(), ShelfError> {
        self.calls.lock().unwrap().push((collection, op));
        if let Some(rx) = self.observer.lock().unwrap().as_ref() {
            self.seen.lock().unwrap().push(rx.borrow().clone());
        }
        if self.failing.lock().unwrap().contains(&(collection, op)) {
            return Err(ShelfError::Server {
                status: 500,
                message: format!("{op:?} on {collection} failed"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self, collection: Collection) -> shelf_core::Result<Vec<BookRecord>> {
        self.enter(collection, Op::List)?;
        Ok(self.records(collection))
    }

    async fn create(
        &self,
        collection: Collection,
        details: &BookDetails,
    ) -> shelf_core::Result<BookRecord> {
        self.enter(collection, Op::Create)?;
        Ok(self.insert(collection, details.clone()))
    }

    async fn update(
        &self,
        collection: Collection,
        id: &RecordId,
        patch: &RecordPatch,
    ) -> shelf_core::Result<Option<BookRecord>> {
        self.enter(collection, Op::Update)?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .entry(collection)
            .or_default()
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| ShelfError::not_found(collection.to_string(), id.to_string()))?;
        patch.apply_to(&mut record.details);
        Ok(Some(record.clone()))
    }

    async fn delete(&self, collection: Collection, id: &RecordId) -> shelf_core::Result<()> {
        self.enter(collection, Op::Delete)?;
        self.records
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .retain(|r| &r.id != id);
        Ok(())
    }
}

pub fn book(title: &str, external_id: &str) -> BookDetails {
    BookDetails::new(title)
        .with_external_id(external_id)
        .with_authors(vec!["Frank Herbert".to_string()])
}
