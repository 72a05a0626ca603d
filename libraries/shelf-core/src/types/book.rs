/// Book record domain types
use super::coerce;
use super::ids::RecordId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The fields of a book entry, as sent when creating a record
///
/// Which fields matter depends on the collection: `pages_read` only means
/// something while reading, `review` and `date_finished` only once finished.
/// All of them are carried by every record so one shape serves all three
/// collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    /// Catalog identifier, used to detect duplicates within a collection
    #[serde(
        rename = "googleId",
        alias = "externalId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub external_id: Option<String>,

    /// Display title, empty when the record was saved without one
    #[serde(default, deserialize_with = "coerce::text_or_empty")]
    pub title: String,

    /// Authors in catalog order
    #[serde(default, deserialize_with = "coerce::list_or_empty")]
    pub authors: Vec<String>,

    /// Cover image URI, empty when unknown
    #[serde(default, deserialize_with = "coerce::text_or_empty")]
    pub thumbnail: String,

    /// Total pages, unknown until the catalog or the reader supplies it
    #[serde(default, deserialize_with = "coerce::optional_count")]
    pub page_count: Option<u32>,

    /// Bookmark; not checked against `page_count`
    #[serde(default, deserialize_with = "coerce::count_or_zero")]
    pub pages_read: u32,

    /// Free-text review
    #[serde(default, deserialize_with = "coerce::text_or_empty")]
    pub review: String,

    /// Calendar date the book was finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_finished: Option<NaiveDate>,
}

impl BookDetails {
    /// Create details with only a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            external_id: None,
            title: title.into(),
            authors: Vec::new(),
            thumbnail: String::new(),
            page_count: None,
            pages_read: 0,
            review: String::new(),
            date_finished: None,
        }
    }

    /// Set the catalog identifier
    #[must_use]
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Set the authors
    #[must_use]
    pub fn with_authors<I, A>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the thumbnail URI
    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Set the total page count
    #[must_use]
    pub fn with_page_count(mut self, page_count: Option<u32>) -> Self {
        self.page_count = page_count;
        self
    }

    /// Set the bookmark
    #[must_use]
    pub fn with_pages_read(mut self, pages_read: u32) -> Self {
        self.pages_read = pages_read;
        self
    }

    /// Whether both entries describe the same book
    ///
    /// Catalog ids decide when both sides carry one; otherwise title and
    /// authors must match.
    pub fn same_book(&self, other: &BookDetails) -> bool {
        match (&self.external_id, &other.external_id) {
            (Some(a), Some(b)) => a == b,
            _ => self.title == other.title && self.authors == other.authors,
        }
    }
}

/// A persisted book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Store-assigned identifier
    pub id: RecordId,

    /// Book fields
    #[serde(flatten)]
    pub details: BookDetails,
}

impl BookRecord {
    /// Create a record from its parts (for stores and tests)
    pub fn new(id: impl Into<RecordId>, details: BookDetails) -> Self {
        Self {
            id: id.into(),
            details,
        }
    }

    /// Build the payload that records this book as finished on `date`
    ///
    /// Reading progress and catalog identity carry over; the record id does
    /// not, the finished collection assigns its own. Any review is dropped.
    pub fn to_finished(&self, date: NaiveDate) -> BookDetails {
        BookDetails {
            external_id: self.details.external_id.clone(),
            title: self.details.title.clone(),
            authors: self.details.authors.clone(),
            thumbnail: self.details.thumbnail.clone(),
            page_count: self.details.page_count,
            pages_read: self.details.pages_read,
            review: String::new(),
            date_finished: Some(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_store_record() {
        let record: BookRecord = serde_json::from_value(json!({
            "id": 3,
            "googleId": "zyTCAlFPjgYC",
            "title": "Dune",
            "authors": ["Frank Herbert"],
            "thumbnail": "https://books.example/dune.jpg",
            "pageCount": "412",
            "pagesRead": 40,
            "review": ""
        }))
        .unwrap();

        assert_eq!(record.id.as_str(), "3");
        assert_eq!(record.details.external_id.as_deref(), Some("zyTCAlFPjgYC"));
        assert_eq!(record.details.page_count, Some(412));
        assert_eq!(record.details.pages_read, 40);
        assert_eq!(record.details.date_finished, None);
    }

    #[test]
    fn test_record_without_title() {
        let records: Vec<BookRecord> = serde_json::from_value(json!([
            { "id": 1, "title": "Dune" },
            { "id": 2, "googleId": "b" },
            { "id": 3, "title": null }
        ]))
        .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].details.title, "Dune");
        assert_eq!(records[1].details.title, "");
        assert_eq!(records[1].details.external_id.as_deref(), Some("b"));
        assert_eq!(records[2].details.title, "");
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let record: BookRecord = serde_json::from_value(json!({
            "id": "k9",
            "title": "Untitled",
            "authors": null,
            "thumbnail": null,
            "dateFinished": "2024-03-09"
        }))
        .unwrap();

        assert!(record.details.authors.is_empty());
        assert!(record.details.thumbnail.is_empty());
        assert_eq!(record.details.pages_read, 0);
        assert_eq!(
            record.details.date_finished,
            NaiveDate::from_ymd_opt(2024, 3, 9)
        );
    }

    #[test]
    fn test_serialize_payload() {
        let details = BookDetails::new("Dune")
            .with_external_id("zyTCAlFPjgYC")
            .with_authors(["Frank Herbert"])
            .with_page_count(None);

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["googleId"], "zyTCAlFPjgYC");
        assert_eq!(value["pageCount"], serde_json::Value::Null);
        assert_eq!(value["pagesRead"], 0);
        assert_eq!(value["review"], "");
        assert!(value.get("dateFinished").is_none());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_to_finished() {
        let mut details = BookDetails::new("Dune")
            .with_authors(["Frank Herbert"])
            .with_thumbnail("https://books.example/dune.jpg")
            .with_page_count(Some(412))
            .with_pages_read(412);
        details.review = "stale".to_string();
        let record = BookRecord::new("7", details);

        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let finished = record.to_finished(date);

        assert_eq!(finished.title, "Dune");
        assert_eq!(finished.page_count, Some(412));
        assert_eq!(finished.pages_read, 412);
        assert!(finished.review.is_empty());
        assert_eq!(
            serde_json::to_value(&finished).unwrap()["dateFinished"],
            "2024-05-01"
        );
    }

    #[test]
    fn test_same_book() {
        let a = BookDetails::new("Dune").with_external_id("x");
        let b = BookDetails::new("Dune Messiah").with_external_id("x");
        let c = BookDetails::new("Dune");
        let d = BookDetails::new("Dune").with_authors(["Frank Herbert"]);

        assert!(a.same_book(&b));
        assert!(a.same_book(&c));
        assert!(!c.same_book(&d));
    }
}
