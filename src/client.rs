//! The main client and its builder.
//!
//! [`QdrantClient`] owns one transport and one instance of every endpoint
//! group, all created in [`QdrantClientBuilder::build`]. Accessors hand out
//! references to those same instances for the client's whole lifetime.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::endpoints::{
    AliasesClient, ClustersClient, CollectionsClient, PointsClient, ServiceClient,
    SnapshotsClient,
};
use crate::error::{QdrantError, QdrantResult};
use crate::models::SetLock;
use crate::transport::ClientInner;

const API_KEY_HEADER: &str = "api-key";

// ---------------------------------------------------------------------------
// QdrantClient
// ---------------------------------------------------------------------------

/// The main Qdrant REST client.
///
/// ```rust,no_run
/// use qdrant_rest::{CreateCollection, QdrantClient};
/// use serde_json::json;
///
/// # async fn example() -> Result<(), qdrant_rest::QdrantError> {
/// let client = QdrantClient::builder("http://localhost:6333")
///     .api_key("secret")
///     .build()?;
///
/// client
///     .collections()
///     .create("docs", CreateCollection::new(json!({ "size": 4, "distance": "Dot" })))
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct QdrantClient {
    inner: Arc<ClientInner>,
    aliases: AliasesClient,
    collections: CollectionsClient,
    points: PointsClient,
    clusters: ClustersClient,
    service: ServiceClient,
    snapshots: SnapshotsClient,
}

impl QdrantClient {
    /// Start building a new client.
    pub fn builder(url: &str) -> QdrantClientBuilder {
        QdrantClientBuilder {
            url: url.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_requests: false,
            raise_on_error: false,
        }
    }

    /// Build a client from loaded settings.
    pub fn from_config(config: &ClientConfig) -> QdrantResult<Self> {
        let mut builder = Self::builder(&config.url)
            .timeout(config.timeout_secs)
            .log_requests(config.log_requests)
            .raise_on_error(config.raise_on_error);
        if let Some(ref key) = config.api_key {
            builder = builder.api_key(key.clone());
        }
        builder.build()
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.inner.api_key.as_deref()
    }

    pub fn raises_on_error(&self) -> bool {
        self.inner.raise_on_error
    }

    // -- Endpoint groups ------------------------------------------------------

    pub fn aliases(&self) -> &AliasesClient {
        &self.aliases
    }

    pub fn collections(&self) -> &CollectionsClient {
        &self.collections
    }

    pub fn points(&self) -> &PointsClient {
        &self.points
    }

    pub fn clusters(&self) -> &ClustersClient {
        &self.clusters
    }

    pub fn service(&self) -> &ServiceClient {
        &self.service
    }

    pub fn snapshots(&self) -> &SnapshotsClient {
        &self.snapshots
    }

    // -- Service shortcuts ----------------------------------------------------

    /// Same as `client.service().telemetry(anonymize)`.
    pub async fn telemetry(&self, anonymize: Option<bool>) -> QdrantResult<Value> {
        self.service.telemetry(anonymize).await
    }

    /// Same as `client.service().metrics(anonymize)`.
    pub async fn metrics(&self, anonymize: Option<bool>) -> QdrantResult<Value> {
        self.service.metrics(anonymize).await
    }

    /// Same as `client.service().locks()`.
    pub async fn locks(&self) -> QdrantResult<Value> {
        self.service.locks().await
    }

    /// Same as `client.service().set_lock(req)`.
    pub async fn set_lock(&self, req: SetLock) -> QdrantResult<Value> {
        self.service.set_lock(req).await
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for [`QdrantClient`]. Settings are fixed once `build` is called.
pub struct QdrantClientBuilder {
    url: String,
    api_key: Option<String>,
    timeout_secs: u64,
    log_requests: bool,
    raise_on_error: bool,
}

impl QdrantClientBuilder {
    /// Send `api-key: <key>` with every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout in seconds (default: 30).
    pub fn timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Log request and response bodies at `info` level.
    pub fn log_requests(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Return [`QdrantError::Api`] for non-2xx responses instead of the body.
    pub fn raise_on_error(mut self, enabled: bool) -> Self {
        self.raise_on_error = enabled;
        self
    }

    /// Build the client.
    pub fn build(self) -> QdrantResult<QdrantClient> {
        let base_url = Url::parse(&self.url)?;
        if base_url.cannot_be_a_base() {
            return Err(QdrantError::Config(format!(
                "url must be absolute, e.g. http://host:6333 (got '{}')",
                self.url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(ref key) = self.api_key {
            let mut value =
                HeaderValue::from_str(key).map_err(|e| QdrantError::Config(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(API_KEY_HEADER), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;

        debug!(url = %base_url, timeout_secs = self.timeout_secs, "qdrant client ready");

        let inner = Arc::new(ClientInner {
            http,
            base_url,
            api_key: self.api_key,
            log_requests: self.log_requests,
            raise_on_error: self.raise_on_error,
        });

        Ok(QdrantClient {
            aliases: AliasesClient::new(Arc::clone(&inner)),
            collections: CollectionsClient::new(Arc::clone(&inner)),
            points: PointsClient::new(Arc::clone(&inner)),
            clusters: ClustersClient::new(Arc::clone(&inner)),
            service: ServiceClient::new(Arc::clone(&inner)),
            snapshots: SnapshotsClient::new(Arc::clone(&inner)),
            inner,
        })
    }
}
