//! Record store operations over JSON collection endpoints.

use crate::error::{ClientError, Result};
use crate::types::CollectionPaths;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use shelf_core::{BookDetails, BookRecord, Collection, RecordId, RecordPatch, RecordStore};
use tracing::debug;
use url::Url;

/// Record store client.
///
/// Each collection is a REST-like list endpoint: `GET`/`POST` on
/// `/{collection}`, `PATCH`/`DELETE` on `/{collection}/{id}`.
#[derive(Debug, Clone)]
pub struct RecordStoreClient {
    http: Client,
    base_url: Url,
    paths: CollectionPaths,
}

impl RecordStoreClient {
    pub(crate) fn new(http: Client, base_url: Url, paths: CollectionPaths) -> Self {
        Self {
            http,
            base_url,
            paths,
        }
    }

    fn collection_url(&self, collection: Collection) -> Result<Url> {
        self.endpoint(collection, None)
    }

    fn record_url(&self, collection: Collection, id: &RecordId) -> Result<Url> {
        self.endpoint(collection, Some(id))
    }

    fn endpoint(&self, collection: Collection, id: Option<&RecordId>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ClientError::InvalidUrl(format!("{} cannot be a base", self.base_url))
            })?;
            segments.pop_if_empty();
            segments.extend(
                self.paths
                    .get(collection)
                    .split('/')
                    .filter(|s| !s.is_empty()),
            );
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        Ok(url)
    }

    /// Get every record of a collection.
    pub async fn list_records(&self, collection: Collection) -> Result<Vec<BookRecord>> {
        let url = self.collection_url(collection)?;
        debug!(url = %url, collection = %collection, "Fetching collection");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::transport)?;
        let response = error_for_status(response).await?;

        let records: Vec<BookRecord> = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse {} records: {}", collection, e))
        })?;

        debug!(collection = %collection, records = records.len(), "Fetched collection");
        Ok(records)
    }

    /// Create a record and return it as persisted.
    pub async fn create_record(
        &self,
        collection: Collection,
        details: &BookDetails,
    ) -> Result<BookRecord> {
        let url = self.collection_url(collection)?;
        debug!(url = %url, collection = %collection, title = %details.title, "Creating record");

        let response = self
            .http
            .post(url)
            .json(details)
            .send()
            .await
            .map_err(ClientError::transport)?;
        let response = error_for_status(response).await?;

        let record: BookRecord = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse created record: {}", e))
        })?;

        debug!(collection = %collection, id = %record.id, "Record created");
        Ok(record)
    }

    /// Apply a partial update.
    ///
    /// Returns `None` when the store acknowledges without a body.
    pub async fn update_record(
        &self,
        collection: Collection,
        id: &RecordId,
        patch: &RecordPatch,
    ) -> Result<Option<BookRecord>> {
        let url = self.record_url(collection, id)?;
        debug!(url = %url, collection = %collection, id = %id, "Updating record");

        let response = self
            .http
            .patch(url)
            .json(patch)
            .send()
            .await
            .map_err(ClientError::transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        }
        let response = error_for_status(response).await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.text().await.map_err(ClientError::transport)?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let record: BookRecord = serde_json::from_str(&body).map_err(|e| {
            ClientError::ParseError(format!("Failed to parse updated record: {}", e))
        })?;
        Ok(Some(record))
    }

    /// Delete a record.
    pub async fn delete_record(&self, collection: Collection, id: &RecordId) -> Result<()> {
        let url = self.record_url(collection, id)?;
        debug!(url = %url, collection = %collection, id = %id, "Deleting record");

        let response = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(ClientError::transport)?;

        if response.status() == StatusCode::NOT_FOUND {
            // Already deleted, that's fine
            debug!(collection = %collection, id = %id, "Record already gone");
            return Ok(());
        }
        error_for_status(response).await?;

        debug!(collection = %collection, id = %id, "Record deleted");
        Ok(())
    }
}

async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(ClientError::ServerError {
            status: status.as_u16(),
            message: error_text,
        })
    }
}

#[async_trait]
impl RecordStore for RecordStoreClient {
    async fn list(&self, collection: Collection) -> shelf_core::Result<Vec<BookRecord>> {
        Ok(self.list_records(collection).await?)
    }

    async fn create(
        &self,
        collection: Collection,
        details: &BookDetails,
    ) -> shelf_core::Result<BookRecord> {
        Ok(self.create_record(collection, details).await?)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &RecordId,
        patch: &RecordPatch,
    ) -> shelf_core::Result<Option<BookRecord>> {
        Ok(self.update_record(collection, id, patch).await?)
    }

    async fn delete(&self, collection: Collection, id: &RecordId) -> shelf_core::Result<()> {
        Ok(self.delete_record(collection, id).await?)
    }
}
