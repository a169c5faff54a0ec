use serde_json::Value;
use std::sync::Arc;

use crate::error::QdrantResult;
use crate::models::{AnonymizeParams, NoParams, SetLock};
use crate::transport::ClientInner;

/// Telemetry, metrics and the global write lock.
#[derive(Debug, Clone)]
pub struct ServiceClient {
    inner: Arc<ClientInner>,
}

impl ServiceClient {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// App, system, collection and cluster telemetry.
    ///
    /// GET /telemetry?anonymize={anonymize}
    pub async fn telemetry(&self, anonymize: Option<bool>) -> QdrantResult<Value> {
        self.inner
            .get_with(&["telemetry"], &AnonymizeParams { anonymize })
            .await
    }

    /// Prometheus metrics; the text exposition is returned as a JSON string.
    ///
    /// GET /metrics?anonymize={anonymize}
    pub async fn metrics(&self, anonymize: Option<bool>) -> QdrantResult<Value> {
        self.inner
            .get_with(&["metrics"], &AnonymizeParams { anonymize })
            .await
    }

    /// GET /locks
    pub async fn locks(&self) -> QdrantResult<Value> {
        self.inner.get(&["locks"]).await
    }

    /// Set lock options and get the previous ones back. While writes are
    /// locked the server rejects every write and collection creation.
    ///
    /// POST /locks
    pub async fn set_lock(&self, req: SetLock) -> QdrantResult<Value> {
        self.inner
            .send_json(reqwest::Method::POST, &["locks"], &NoParams {}, &req)
            .await
    }
}
