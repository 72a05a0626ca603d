/// Shelf configuration
use crate::error::{Result, SyncError};
use serde::{Deserialize, Serialize};
use shelf_client::{ClientConfig, CollectionPaths, DEFAULT_CATALOG_URL, DEFAULT_PAGE_SIZE};
use std::path::Path;
use std::time::Duration;

/// Largest page the catalog hands out in one response.
const MAX_PAGE_SIZE: u32 = 40;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_url")]
    pub url: String,

    #[serde(default)]
    pub paths: CollectionPaths,

    /// Whole-request timeout in seconds; unset means wait indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_url")]
    pub url: String,

    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `tracing` filter directives, e.g. "shelf_sync=debug,info"
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl ShelfConfig {
    /// Load configuration from a TOML, JSON or YAML file.
    ///
    /// Missing keys take their defaults. The result is validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| SyncError::Config(e.to_string()))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| SyncError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        check_http_url("store.url", &self.store.url)?;
        check_http_url("catalog.url", &self.catalog.url)?;

        if self.catalog.page_size == 0 || self.catalog.page_size > MAX_PAGE_SIZE {
            return Err(SyncError::Config(format!(
                "catalog.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.catalog.page_size
            )));
        }

        if self.store.request_timeout_secs == Some(0) {
            return Err(SyncError::Config(
                "store.request_timeout_secs must be positive; leave it unset to disable".to_string(),
            ));
        }

        Ok(())
    }

    /// Client settings for `ShelfClient::new`.
    pub fn client_config(&self) -> ClientConfig {
        let mut client = ClientConfig::new(&self.store.url)
            .with_paths(self.store.paths.clone())
            .with_catalog_url(&self.catalog.url)
            .with_page_size(self.catalog.page_size);

        if let Some(secs) = self.store.request_timeout_secs {
            client = client.with_request_timeout(Duration::from_secs(secs));
        }

        client
    }
}

fn check_http_url(key: &str, url: &str) -> Result<()> {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(SyncError::Config(format!(
            "{key} must be an http(s) URL, got {url:?}"
        )))
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            url: default_store_url(),
            paths: CollectionPaths::default(),
            request_timeout_secs: None,
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            url: default_catalog_url(),
            page_size: default_page_size(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

// Default values
fn default_store_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_filter() -> String {
    "info".to_string()
}
