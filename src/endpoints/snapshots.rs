use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

use crate::error::QdrantResult;
use crate::models::NoParams;
use crate::transport::ClientInner;

const PATH: &str = "snapshots";

/// Whole-storage snapshots (every collection at once).
#[derive(Debug, Clone)]
pub struct SnapshotsClient {
    inner: Arc<ClientInner>,
}

impl SnapshotsClient {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// GET /snapshots
    pub async fn list(&self) -> QdrantResult<Value> {
        self.inner.get(&[PATH]).await
    }

    /// POST /snapshots
    pub async fn create(&self) -> QdrantResult<Value> {
        self.inner.post_empty(&[PATH], &NoParams {}).await
    }

    /// DELETE /snapshots/{snapshot_name}
    pub async fn delete(&self, snapshot_name: &str) -> QdrantResult<Value> {
        self.inner.delete(&[PATH, snapshot_name]).await
    }

    /// Download a storage snapshot into `filepath`, replacing any existing
    /// file. Returns the number of bytes written.
    ///
    /// GET /snapshots/{snapshot_name}
    pub async fn download(
        &self,
        snapshot_name: &str,
        filepath: impl AsRef<Path>,
    ) -> QdrantResult<u64> {
        self.inner
            .download(&[PATH, snapshot_name], filepath.as_ref())
            .await
    }
}
