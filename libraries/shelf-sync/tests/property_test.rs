//! Property-based tests for the collection controllers
//!
//! Uses proptest to drive controllers over the in-memory store.

mod common;

use chrono::NaiveDate;
use common::{MemoryStore, Op};
use proptest::prelude::*;
use shelf_core::{BookDetails, Collection};
use shelf_sync::{move_to_finished, FinishedController, ReadingController, WishlistController};
use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

// ===== Helpers =====

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn arbitrary_book() -> impl Strategy<Value = BookDetails> {
    (
        "[a-z0-9]{1,4}",                  // catalog id, short so collisions happen
        "[A-Za-z ]{1,30}",                // title
        prop::collection::vec("[A-Za-z ]{1,20}", 0..3),
        proptest::option::of(1u32..2000), // page count
        0u32..3000,                       // bookmark, may exceed page count
    )
        .prop_map(|(external_id, title, authors, page_count, pages_read)| {
            BookDetails::new(title)
                .with_external_id(external_id)
                .with_authors(authors)
                .with_page_count(page_count)
                .with_pages_read(pages_read)
        })
}

// ===== Property Tests =====

proptest! {
    /// Property: the wishlist holds one record per catalog id, and only
    /// first sightings reach the store
    #[test]
    fn wishlist_one_record_per_catalog_id(books in prop::collection::vec(arbitrary_book(), 1..30)) {
        let store = Arc::new(MemoryStore::new());
        let mut wishlist = WishlistController::new(Arc::clone(&store));

        let distinct: HashSet<_> = books.iter().filter_map(|b| b.external_id.clone()).collect();

        block_on(async {
            for details in books {
                let _ = wishlist.add(details).await;
            }
        });

        prop_assert_eq!(wishlist.len(), distinct.len());
        prop_assert_eq!(store.calls(Collection::Wishlist, Op::Create), distinct.len());
        let stored = store.records(Collection::Wishlist);
        prop_assert_eq!(wishlist.items(), stored.as_slice());

        let ids: HashSet<_> = wishlist.items().iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(ids.len(), wishlist.len());
        prop_assert!(wishlist.activity().is_idle());
    }

    /// Property: a move carries the book over unchanged apart from the
    /// review and the finish date
    #[test]
    fn move_preserves_book(details in arbitrary_book(), day in 1u32..=28) {
        let date = NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
        let store = Arc::new(MemoryStore::new());
        let original = store.insert(Collection::InProgress, details.clone());

        let mut reading = ReadingController::new(Arc::clone(&store));
        let mut finished = FinishedController::new(Arc::clone(&store));

        let created = block_on(async {
            reading.fetch_all().await.unwrap();
            move_to_finished(&mut reading, &mut finished, &original.id, true, date).await
        })
        .unwrap();

        prop_assert_eq!(&created.details.title, &details.title);
        prop_assert_eq!(&created.details.authors, &details.authors);
        prop_assert_eq!(&created.details.external_id, &details.external_id);
        prop_assert_eq!(created.details.page_count, details.page_count);
        prop_assert_eq!(created.details.pages_read, details.pages_read);
        prop_assert_eq!(created.details.date_finished, Some(date));
        prop_assert!(reading.is_empty());
        prop_assert_eq!(finished.len(), 1);
    }
}
