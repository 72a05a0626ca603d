/// Partial record updates
use super::book::BookDetails;
use serde::Serialize;

/// Partial update for a record
///
/// Only the fields that are `Some` are sent. `page_count` is doubly optional
/// so an unknown page count can be written back explicitly as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    /// New bookmark
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_read: Option<u32>,

    /// New page count; `Some(None)` clears it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<Option<u32>>,

    /// New review text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

impl RecordPatch {
    /// Update only the bookmark
    pub fn pages_read(pages_read: u32) -> Self {
        Self {
            pages_read: Some(pages_read),
            ..Self::default()
        }
    }

    /// Update bookmark and page count together
    pub fn progress(pages_read: u32, page_count: Option<u32>) -> Self {
        Self {
            pages_read: Some(pages_read),
            page_count: Some(page_count),
            review: None,
        }
    }

    /// Update only the review
    pub fn review(review: impl Into<String>) -> Self {
        Self {
            review: Some(review.into()),
            ..Self::default()
        }
    }

    /// Whether the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.pages_read.is_none() && self.page_count.is_none() && self.review.is_none()
    }

    /// Merge the patch into local fields
    pub fn apply_to(&self, details: &mut BookDetails) {
        if let Some(pages_read) = self.pages_read {
            details.pages_read = pages_read;
        }
        if let Some(page_count) = self.page_count {
            details.page_count = page_count;
        }
        if let Some(review) = &self.review {
            details.review.clone_from(review);
        }
    }
}
