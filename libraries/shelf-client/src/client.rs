//! Entry point that wires both HTTP clients to one connection pool.

use crate::catalog::CatalogClient;
use crate::error::{ClientError, Result};
use crate::store::RecordStoreClient;
use crate::types::ClientConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Builds the record store and catalog clients for one configuration.
///
/// # Example
///
/// ```ignore
/// use shelf_client::{ClientConfig, ShelfClient};
/// use shelf_core::{Catalog, Collection, RecordStore};
///
/// let client = ShelfClient::new(ClientConfig::new("http://localhost:3000"))?;
///
/// let hits = client.catalog().search("Dune").await;
/// let wishlist = client.store().list(Collection::Wishlist).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ShelfClient {
    http: Client,
    config: ClientConfig,
    store_url: Url,
    catalog_url: Url,
}

impl ShelfClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let store_url = parse_base_url(&config.store_url)?;
        let catalog_url = parse_base_url(&config.catalog_url)?;

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Shelf/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ClientError::Request)?;

        debug!(store = %store_url, catalog = %catalog_url, "Created shelf client");

        Ok(Self {
            http,
            config,
            store_url,
            catalog_url,
        })
    }

    /// Normalized record store URL.
    pub fn store_url(&self) -> &str {
        self.store_url.as_str().trim_end_matches('/')
    }

    /// Record store client sharing this client's connection pool.
    pub fn store(&self) -> RecordStoreClient {
        RecordStoreClient::new(
            self.http.clone(),
            self.store_url.clone(),
            self.config.paths.clone(),
        )
    }

    /// Catalog client sharing this client's connection pool.
    pub fn catalog(&self) -> CatalogClient {
        CatalogClient::new(
            self.http.clone(),
            self.catalog_url.clone(),
            self.config.page_size,
        )
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    if raw.is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }

    let trimmed = raw.trim_end_matches('/');
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    Url::parse(trimmed).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))
}
