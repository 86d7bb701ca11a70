//! HTTP client for the remote top-100 game catalogs.
//!
//! Each platform publishes one JSON document. [`CatalogClient::fetch_all`]
//! downloads both concurrently and fails as soon as either download fails,
//! so callers never see one platform's games without the other's.

use gamebase_core::catalog::{parse_catalog, CatalogEntry};
use gamebase_core::platform::Platform;

/// Default location of the Android top-100 document.
pub const DEFAULT_ANDROID_CATALOG_URL: &str =
    "https://wizz-technical-test-dev.s3.eu-west-3.amazonaws.com/android.top100.json";

/// Default location of the iOS top-100 document.
pub const DEFAULT_IOS_CATALOG_URL: &str =
    "https://wizz-technical-test-dev.s3.eu-west-3.amazonaws.com/ios.top100.json";

/// Errors from fetching or decoding a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog host returned a non-2xx status code.
    #[error("Catalog {url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The body was not a usable catalog document.
    #[error("Catalog {url} is malformed: {message}")]
    Format { url: String, message: String },
}

/// Entries from both platform catalogs, in document order.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub android: Vec<CatalogEntry>,
    pub ios: Vec<CatalogEntry>,
}

impl CatalogSnapshot {
    /// Total number of entries across both platforms.
    pub fn len(&self) -> usize {
        self.android.len() + self.ios.len()
    }

    /// True when neither catalog listed anything.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the snapshot, yielding Android entries followed by iOS ones.
    pub fn into_tagged(self) -> impl Iterator<Item = (Platform, CatalogEntry)> {
        let android = self.android.into_iter().map(|e| (Platform::Android, e));
        let ios = self.ios.into_iter().map(|e| (Platform::Ios, e));
        android.chain(ios)
    }
}

/// Fetches the Android and iOS catalogs.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    android_url: String,
    ios_url: String,
}

impl CatalogClient {
    /// Create a client for the given catalog URLs.
    pub fn new(android_url: String, ios_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), android_url, ios_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, android_url: String, ios_url: String) -> Self {
        Self {
            client,
            android_url,
            ios_url,
        }
    }

    /// URL of the catalog for `platform`.
    pub fn url(&self, platform: Platform) -> &str {
        match platform {
            Platform::Android => &self.android_url,
            Platform::Ios => &self.ios_url,
        }
    }

    /// Download and parse both catalogs concurrently.
    ///
    /// Returns the first error if either download fails; the other request
    /// is dropped.
    pub async fn fetch_all(&self) -> Result<CatalogSnapshot, CatalogError> {
        let (android, ios) =
            tokio::try_join!(self.fetch(Platform::Android), self.fetch(Platform::Ios))?;

        Ok(CatalogSnapshot { android, ios })
    }

    /// Download and parse the catalog for a single platform.
    pub async fn fetch(&self, platform: Platform) -> Result<Vec<CatalogEntry>, CatalogError> {
        let url = self.url(platform);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {e}>"));
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Request {
                url: url.to_string(),
                source,
            })?;

        let doc: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| CatalogError::Format {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let entries = parse_catalog(&doc).map_err(|e| CatalogError::Format {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        tracing::debug!(%platform, url, count = entries.len(), "Fetched catalog");
        Ok(entries)
    }
}
