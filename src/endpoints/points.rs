use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;

use crate::error::QdrantResult;
use crate::models::{
    ClearPayload, CountPoints, DeletePayload, DeletePoints, GetPoints, NoParams, PointId,
    ReadConsistency, ReadParams, RecommendBatch, RecommendPoints, ScrollPoints, SearchBatch,
    SearchPoints, SetPayload, UpsertPoints,
};
use crate::transport::ClientInner;

const COLLECTIONS: &str = "collections";
const PATH: &str = "points";

/// Point reads, writes, payload edits and similarity queries within a
/// collection.
///
/// Mutating calls take `wait` / `ordering` from the request and send them as
/// query parameters only when set.
#[derive(Debug, Clone)]
pub struct PointsClient {
    inner: Arc<ClientInner>,
}

impl PointsClient {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    // -- Retrieval ------------------------------------------------------------

    /// Retrieve several points by id.
    ///
    /// POST /collections/{collection_name}/points?consistency=
    pub async fn list(&self, collection_name: &str, req: GetPoints) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH],
                &req.read_params(),
                &req,
            )
            .await
    }

    /// Retrieve a single point.
    ///
    /// GET /collections/{collection_name}/points/{id}?consistency=
    pub async fn get(
        &self,
        collection_name: &str,
        id: impl Into<PointId>,
        consistency: Option<ReadConsistency>,
    ) -> QdrantResult<Value> {
        let id = id.into().to_string();
        self.inner
            .get_with(
                &[COLLECTIONS, collection_name, PATH, &id],
                &ReadParams::new(consistency),
            )
            .await
    }

    // -- Writes ---------------------------------------------------------------

    /// Insert points, overwriting any with the same id.
    ///
    /// PUT /collections/{collection_name}/points?wait=&ordering=
    pub async fn upsert(&self, collection_name: &str, req: UpsertPoints) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::PUT,
                &[COLLECTIONS, collection_name, PATH],
                &req.write_params(),
                &req,
            )
            .await
    }

    /// POST /collections/{collection_name}/points/delete?wait=&ordering=
    pub async fn delete(&self, collection_name: &str, req: DeletePoints) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH, "delete"],
                &req.write_params(),
                &req,
            )
            .await
    }

    /// Merge `payload` into the payload of the selected points.
    ///
    /// POST /collections/{collection_name}/points/payload?wait=&ordering=
    pub async fn set_payload(&self, collection_name: &str, req: SetPayload) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH, "payload"],
                &req.write_params(),
                &req,
            )
            .await
    }

    /// Replace the whole payload of the selected points.
    ///
    /// PUT /collections/{collection_name}/points/payload?wait=&ordering=
    pub async fn overwrite_payload(
        &self,
        collection_name: &str,
        req: SetPayload,
    ) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::PUT,
                &[COLLECTIONS, collection_name, PATH, "payload"],
                &req.write_params(),
                &req,
            )
            .await
    }

    /// Remove the listed payload keys from the selected points.
    ///
    /// POST /collections/{collection_name}/points/payload/delete?wait=&ordering=
    pub async fn clear_payload_keys(
        &self,
        collection_name: &str,
        req: DeletePayload,
    ) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH, "payload", "delete"],
                &req.write_params(),
                &req,
            )
            .await
    }

    /// Remove all payload from the selected points.
    ///
    /// POST /collections/{collection_name}/points/payload/clear?wait=&ordering=
    pub async fn clear_payload(&self, collection_name: &str, req: ClearPayload) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH, "payload", "clear"],
                &req.write_params(),
                &req,
            )
            .await
    }

    // -- Queries --------------------------------------------------------------

    /// One page of points matching the filter. Pass the returned
    /// `next_page_offset` as the next request's `offset`.
    ///
    /// POST /collections/{collection_name}/points/scroll?consistency=
    pub async fn scroll(&self, collection_name: &str, req: ScrollPoints) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH, "scroll"],
                &req.read_params(),
                &req,
            )
            .await
    }

    /// POST /collections/{collection_name}/points/search?consistency=
    pub async fn search(&self, collection_name: &str, req: SearchPoints) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH, "search"],
                &req.read_params(),
                &req,
            )
            .await
    }

    /// POST /collections/{collection_name}/points/search/batch?consistency=
    pub async fn batch_search(&self, collection_name: &str, req: SearchBatch) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH, "search", "batch"],
                &req.read_params(),
                &req,
            )
            .await
    }

    /// Points closer to the positive examples and further from the negative
    /// ones.
    ///
    /// POST /collections/{collection_name}/points/recommend?consistency=
    pub async fn recommend(&self, collection_name: &str, req: RecommendPoints) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH, "recommend"],
                &req.read_params(),
                &req,
            )
            .await
    }

    /// POST /collections/{collection_name}/points/recommend/batch?consistency=
    pub async fn batch_recommend(
        &self,
        collection_name: &str,
        req: RecommendBatch,
    ) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH, "recommend", "batch"],
                &req.read_params(),
                &req,
            )
            .await
    }

    /// Count points matching the filter (all points when unset). The body's
    /// `exact` key carries the caller's flag and is omitted when unset.
    ///
    /// POST /collections/{collection_name}/points/count
    pub async fn count(&self, collection_name: &str, req: CountPoints) -> QdrantResult<Value> {
        self.inner
            .send_json(
                Method::POST,
                &[COLLECTIONS, collection_name, PATH, "count"],
                &NoParams {},
                &req,
            )
            .await
    }
}
