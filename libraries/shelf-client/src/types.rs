//! Types for Shelf client configuration and catalog responses.

use serde::{Deserialize, Serialize};
use shelf_core::{Candidate, Collection};
use std::time::Duration;

/// Google Books volumes endpoint.
pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Number of candidates requested per search.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Configuration for connecting to the record store and the catalog.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the record store (e.g., "http://localhost:3000")
    pub store_url: String,
    /// Endpoint path of each collection under the store URL
    pub paths: CollectionPaths,
    /// Catalog search endpoint
    pub catalog_url: String,
    /// Maximum number of candidates per search
    pub page_size: u32,
    /// Whole-request timeout; requests wait indefinitely when unset
    pub request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a config for a store, using the public catalog.
    pub fn new(store_url: impl Into<String>) -> Self {
        Self {
            store_url: store_url.into(),
            paths: CollectionPaths::default(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout: None,
        }
    }

    /// Point catalog searches somewhere else.
    #[must_use]
    pub fn with_catalog_url(mut self, catalog_url: impl Into<String>) -> Self {
        self.catalog_url = catalog_url.into();
        self
    }

    /// Change how many candidates a search asks for.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override collection endpoint paths.
    #[must_use]
    pub fn with_paths(mut self, paths: CollectionPaths) -> Self {
        self.paths = paths;
        self
    }

    /// Bound every request by `timeout`.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

/// Endpoint path of each collection, relative to the store URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPaths {
    #[serde(default = "default_wishlist_path")]
    pub wishlist: String,

    #[serde(default = "default_in_progress_path")]
    pub in_progress: String,

    #[serde(default = "default_finished_path")]
    pub finished: String,
}

impl CollectionPaths {
    pub fn get(&self, collection: Collection) -> &str {
        match collection {
            Collection::Wishlist => &self.wishlist,
            Collection::InProgress => &self.in_progress,
            Collection::Finished => &self.finished,
        }
    }
}

impl Default for CollectionPaths {
    fn default() -> Self {
        Self {
            wishlist: default_wishlist_path(),
            in_progress: default_in_progress_path(),
            finished: default_finished_path(),
        }
    }
}

fn default_wishlist_path() -> String {
    Collection::Wishlist.default_path().to_string()
}

fn default_in_progress_path() -> String {
    Collection::InProgress.default_path().to_string()
}

fn default_finished_path() -> String {
    Collection::Finished.default_path().to_string()
}

// =============================================================================
// Catalog Types
// =============================================================================

/// Catalog search response. A response without `items` means no matches.
#[derive(Debug, Deserialize)]
pub(crate) struct VolumesResponse {
    #[serde(default)]
    pub items: Option<Vec<Volume>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Volume {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub image_links: Option<ImageLinks>,
    pub page_count: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ImageLinks {
    pub thumbnail: Option<String>,
}

impl From<Volume> for Candidate {
    fn from(volume: Volume) -> Self {
        let info = volume.volume_info.unwrap_or_default();
        Candidate {
            external_id: volume.id,
            title: info
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Untitled".to_string()),
            authors: info.authors.unwrap_or_default(),
            thumbnail: info
                .image_links
                .and_then(|links| links.thumbnail)
                .unwrap_or_default(),
            page_count: info.page_count,
        }
    }
}
