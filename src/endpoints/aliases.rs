use serde_json::Value;
use std::sync::Arc;

use crate::error::QdrantResult;
use crate::transport::ClientInner;

const PATH: &str = "aliases";

/// Deployment-wide alias listing.
#[derive(Debug, Clone)]
pub struct AliasesClient {
    inner: Arc<ClientInner>,
}

impl AliasesClient {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List every alias across all collections.
    ///
    /// GET /aliases
    pub async fn list(&self) -> QdrantResult<Value> {
        self.inner.get(&[PATH]).await
    }
}
