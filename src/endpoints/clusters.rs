use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::error::QdrantResult;
use crate::models::{ForceParams, NoParams};
use crate::transport::ClientInner;

const PATH: &str = "cluster";

/// Cluster status and Raft maintenance.
#[derive(Debug, Clone)]
pub struct ClustersClient {
    inner: Arc<ClientInner>,
}

impl ClustersClient {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Current state and composition of the cluster.
    ///
    /// GET /cluster
    pub async fn info(&self) -> QdrantResult<Value> {
        self.inner.get(&[PATH]).await
    }

    /// Try to recover this peer's Raft state.
    ///
    /// POST /cluster/recover
    pub async fn recover(&self) -> QdrantResult<Value> {
        self.inner.post_empty(&[PATH, "recover"], &NoParams {}).await
    }

    /// Remove a peer from the cluster.
    ///
    /// POST /cluster/recover?force={force}
    ///
    /// Known defect kept for compatibility: the request goes to the recover
    /// endpoint and `peer_id` is not transmitted, so the server performs a
    /// Raft recovery rather than removing the peer. Use the server's
    /// `DELETE /cluster/peer/{id}` directly until this is resolved.
    pub async fn remove_peer(&self, peer_id: u64, force: Option<bool>) -> QdrantResult<Value> {
        debug!(peer_id, ?force, "remove_peer posts to /cluster/recover; peer id is not sent");
        self.inner
            .post_empty(&[PATH, "recover"], &ForceParams { force })
            .await
    }
}
