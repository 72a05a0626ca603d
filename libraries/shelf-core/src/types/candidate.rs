/// Catalog search result types
use super::book::BookDetails;
use serde::{Deserialize, Serialize};

/// A search hit from the external catalog, not yet persisted anywhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Catalog identifier
    pub external_id: String,

    /// Title as reported by the catalog
    pub title: String,

    /// Authors in catalog order
    pub authors: Vec<String>,

    /// Cover image URI, empty when the catalog has none
    pub thumbnail: String,

    /// Page count as reported by the catalog
    pub page_count: Option<u32>,
}

impl Candidate {
    /// Thumbnail URI with plain `http://` links upgraded to `https://`
    pub fn secure_thumbnail(&self) -> String {
        match self.thumbnail.strip_prefix("http://") {
            Some(rest) => format!("https://{}", rest),
            None => self.thumbnail.clone(),
        }
    }

    /// Payload for adding this candidate to a collection
    ///
    /// Only the catalog fields are copied; reading progress and page count
    /// are left for the caller to fill in.
    pub fn to_details(&self) -> BookDetails {
        BookDetails::new(self.title.clone())
            .with_external_id(self.external_id.clone())
            .with_authors(self.authors.iter().cloned())
            .with_thumbnail(self.thumbnail.clone())
    }
}
