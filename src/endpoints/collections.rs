use reqwest::Method;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

use crate::error::QdrantResult;
use crate::models::{
    CreateCollection, CreateFieldIndex, NoParams, RestoreSnapshot, UpdateAliases,
    UpdateCollection, UpdateCollectionCluster,
};
use crate::transport::ClientInner;

const PATH: &str = "collections";

/// Collection lifecycle, aliases, field indexes, shard placement and
/// per-collection snapshots.
#[derive(Debug, Clone)]
pub struct CollectionsClient {
    inner: Arc<ClientInner>,
}

impl CollectionsClient {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    // -- Lifecycle ------------------------------------------------------------

    /// Names of all existing collections.
    ///
    /// GET /collections
    pub async fn list(&self) -> QdrantResult<Value> {
        self.inner.get(&[PATH]).await
    }

    /// Detailed information about one collection.
    ///
    /// GET /collections/{collection_name}
    pub async fn get(&self, collection_name: &str) -> QdrantResult<Value> {
        self.inner.get(&[PATH, collection_name]).await
    }

    /// Create a collection with the full configuration in `req`.
    ///
    /// PUT /collections/{collection_name}
    pub async fn create(&self, collection_name: &str, req: CreateCollection) -> QdrantResult<Value> {
        self.inner
            .send_json(Method::PUT, &[PATH, collection_name], &NoParams {}, &req)
            .await
    }

    /// Merge new optimizer config and/or params into an existing collection.
    ///
    /// PATCH /collections/{collection_name}
    pub async fn update(&self, collection_name: &str, req: UpdateCollection) -> QdrantResult<Value> {
        self.inner
            .send_json(Method::PATCH, &[PATH, collection_name], &NoParams {}, &req)
            .await
    }

    /// Drop a collection and all its data.
    ///
    /// DELETE /collections/{collection_name}
    pub async fn delete(&self, collection_name: &str) -> QdrantResult<Value> {
        self.inner.delete(&[PATH, collection_name]).await
    }

    // -- Aliases --------------------------------------------------------------

    /// GET /collections/{collection_name}/aliases
    pub async fn aliases(&self, collection_name: &str) -> QdrantResult<Value> {
        self.inner.get(&[PATH, collection_name, "aliases"]).await
    }

    /// Apply alias actions (create, delete, rename) in one atomic step.
    ///
    /// POST /collections/aliases
    pub async fn update_aliases(&self, actions: Vec<Value>) -> QdrantResult<Value> {
        let req = UpdateAliases { actions };
        self.inner
            .send_json(Method::POST, &[PATH, "aliases"], &NoParams {}, &req)
            .await
    }

    // -- Field indexes --------------------------------------------------------

    /// PUT /collections/{collection_name}/index?wait=&ordering=
    pub async fn create_index(
        &self,
        collection_name: &str,
        req: CreateFieldIndex,
    ) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::PUT,
                &[PATH, collection_name, "index"],
                &req.write_params(),
                &req,
            )
            .await
    }

    /// DELETE /collections/{collection_name}/index/{field_name}
    pub async fn delete_index(&self, collection_name: &str, field_name: &str) -> QdrantResult<Value> {
        self.inner
            .delete(&[PATH, collection_name, "index", field_name])
            .await
    }

    // -- Cluster placement ----------------------------------------------------

    /// Shard placement of a collection.
    ///
    /// GET /collections/{collection_name}/cluster
    pub async fn cluster_info(&self, collection_name: &str) -> QdrantResult<Value> {
        self.inner.get(&[PATH, collection_name, "cluster"]).await
    }

    /// Move a shard between peers.
    ///
    /// POST /collections/{collection_name}/cluster
    pub async fn update_cluster(&self, collection_name: &str, move_shard: Value) -> QdrantResult<Value> {
        let req = UpdateCollectionCluster { move_shard };
        self.inner
            .send_json(
                Method::POST,
                &[PATH, collection_name, "cluster"],
                &NoParams {},
                &req,
            )
            .await
    }

    // -- Snapshots ------------------------------------------------------------

    /// GET /collections/{collection_name}/snapshots
    pub async fn list_snapshots(&self, collection_name: &str) -> QdrantResult<Value> {
        self.inner.get(&[PATH, collection_name, "snapshots"]).await
    }

    /// POST /collections/{collection_name}/snapshots
    pub async fn create_snapshot(&self, collection_name: &str) -> QdrantResult<Value> {
        self.inner
            .post_empty(&[PATH, collection_name, "snapshots"], &NoParams {})
            .await
    }

    /// DELETE /collections/{collection_name}/snapshots/{snapshot_name}
    pub async fn delete_snapshot(
        &self,
        collection_name: &str,
        snapshot_name: &str,
    ) -> QdrantResult<Value> {
        self.inner
            .delete(&[PATH, collection_name, "snapshots", snapshot_name])
            .await
    }

    /// Download a collection snapshot into `filepath`, replacing any existing
    /// file. Returns the number of bytes written.
    ///
    /// GET /collections/{collection_name}/snapshots/{snapshot_name}
    pub async fn download_snapshot(
        &self,
        collection_name: &str,
        snapshot_name: &str,
        filepath: impl AsRef<Path>,
    ) -> QdrantResult<u64> {
        self.inner
            .download(
                &[PATH, collection_name, "snapshots", snapshot_name],
                filepath.as_ref(),
            )
            .await
    }

    /// Recover collection data from a snapshot, overwriting what this node
    /// stores for it. The collection is created if it does not exist.
    ///
    /// POST /collections/{collection_name}/snapshots/recover?wait=
    pub async fn restore_snapshot(
        &self,
        collection_name: &str,
        req: RestoreSnapshot,
    ) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[PATH, collection_name, "snapshots", "recover"],
                &req.wait_params(),
                &req,
            )
            .await
    }
}
