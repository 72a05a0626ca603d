//! External book catalog search.

use crate::error::{ClientError, Result};
use crate::types::VolumesResponse;
use async_trait::async_trait;
use reqwest::Client;
use shelf_core::{Candidate, Catalog};
use tracing::{debug, warn};
use url::Url;

/// Catalog client for a Google Books style volumes endpoint.
///
/// Every search is exactly one request. Results are neither cached nor
/// re-sorted.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    search_url: Url,
    page_size: u32,
}

impl CatalogClient {
    pub(crate) fn new(http: Client, search_url: Url, page_size: u32) -> Self {
        Self {
            http,
            search_url,
            page_size,
        }
    }

    /// Maximum number of candidates a search returns.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Search the catalog, reporting failures.
    ///
    /// Blank queries return no candidates without a request.
    pub async fn try_search(&self, query: &str) -> Result<Vec<Candidate>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("maxResults", &self.page_size.to_string());

        debug!(url = %url, query = %query, "Searching catalog");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ClientError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let volumes: VolumesResponse = response.json().await.map_err(|e| {
            ClientError::ParseError(format!("Failed to parse search response: {}", e))
        })?;

        let candidates: Vec<Candidate> = volumes
            .items
            .unwrap_or_default()
            .into_iter()
            .take(self.page_size as usize)
            .map(Candidate::from)
            .collect();

        debug!(results = candidates.len(), "Search complete");
        Ok(candidates)
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn search(&self, query: &str) -> Vec<Candidate> {
        match self.try_search(query).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(query = %query.trim(), error = %e, "Catalog search failed, showing no matches");
                Vec::new()
            }
        }
    }
}
