//! Point models: upserts, payload edits, scroll, search, recommend and count.

use serde::Serialize;
use serde_json::Value;

use super::common::{PointId, ReadConsistency, ReadParams, WriteOrdering, WriteParams};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A single point to upsert.
#[derive(Debug, Clone, Serialize)]
pub struct PointStruct {
    pub id: PointId,
    /// A dense vector or a map of named vectors.
    pub vector: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl PointStruct {
    pub fn new(id: impl Into<PointId>, vector: impl Into<Value>) -> Self {
        Self {
            id: id.into(),
            vector: vector.into(),
            payload: None,
        }
    }

    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Column-oriented upsert: `ids[i]` pairs with `vectors[i]` and `payloads[i]`.
#[derive(Debug, Clone, Serialize)]
pub struct Batch {
    pub ids: Vec<PointId>,
    pub vectors: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payloads: Option<Vec<Value>>,
}

impl Batch {
    pub fn new(ids: Vec<PointId>, vectors: impl Into<Value>) -> Self {
        Self {
            ids,
            vectors: vectors.into(),
            payloads: None,
        }
    }

    pub fn payloads(mut self, payloads: Vec<Value>) -> Self {
        self.payloads = Some(payloads);
        self
    }
}

// Adds `wait` / `ordering` setters and the query-string projection to a
// mutating request.
macro_rules! write_options {
    ($ty:ty) => {
        impl $ty {
            /// Block until the write has been applied.
            pub fn wait(mut self, wait: bool) -> Self {
                self.wait = Some(wait);
                self
            }

            pub fn ordering(mut self, ordering: WriteOrdering) -> Self {
                self.ordering = Some(ordering);
                self
            }

            pub(crate) fn write_params(&self) -> WriteParams {
                WriteParams {
                    wait: self.wait,
                    ordering: self.ordering,
                }
            }
        }
    };
}

macro_rules! read_options {
    ($ty:ty) => {
        impl $ty {
            pub fn consistency(mut self, consistency: ReadConsistency) -> Self {
                self.consistency = Some(consistency);
                self
            }

            pub(crate) fn read_params(&self) -> ReadParams {
                ReadParams::new(self.consistency)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Retrieval
// ---------------------------------------------------------------------------

/// Request body for `POST /collections/{name}/points`.
#[derive(Debug, Clone, Serialize)]
pub struct GetPoints {
    pub ids: Vec<PointId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_vector: Option<Value>,
    #[serde(skip)]
    pub consistency: Option<ReadConsistency>,
}

impl GetPoints {
    pub fn new(ids: Vec<PointId>) -> Self {
        Self {
            ids,
            with_payload: None,
            with_vector: None,
            consistency: None,
        }
    }

    /// `true`, `false`, or a list of payload keys to include.
    pub fn with_payload(mut self, selector: impl Into<Value>) -> Self {
        self.with_payload = Some(selector.into());
        self
    }

    pub fn with_vector(mut self, selector: impl Into<Value>) -> Self {
        self.with_vector = Some(selector.into());
        self
    }
}

read_options!(GetPoints);

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// Request body for `PUT /collections/{name}/points`.
///
/// Either `points` or `batch` is normally set; neither is enforced locally.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpsertPoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<Batch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<PointStruct>>,
    #[serde(skip)]
    pub wait: Option<bool>,
    #[serde(skip)]
    pub ordering: Option<WriteOrdering>,
}

impl UpsertPoints {
    pub fn points(points: Vec<PointStruct>) -> Self {
        Self {
            points: Some(points),
            ..Self::default()
        }
    }

    pub fn batch(batch: Batch) -> Self {
        Self {
            batch: Some(batch),
            ..Self::default()
        }
    }
}

write_options!(UpsertPoints);

/// Request body for `POST /collections/{name}/points/delete`.
#[derive(Debug, Clone, Serialize)]
pub struct DeletePoints {
    pub points: Vec<PointId>,
    #[serde(skip)]
    pub wait: Option<bool>,
    #[serde(skip)]
    pub ordering: Option<WriteOrdering>,
}

impl DeletePoints {
    pub fn new(points: Vec<PointId>) -> Self {
        Self {
            points,
            wait: None,
            ordering: None,
        }
    }
}

write_options!(DeletePoints);

/// Request body for setting or overwriting payloads.
///
/// Targets are chosen by `points`, `filter`, or both; the server decides how
/// to combine them.
#[derive(Debug, Clone, Serialize)]
pub struct SetPayload {
    pub payload: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<PointId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip)]
    pub wait: Option<bool>,
    #[serde(skip)]
    pub ordering: Option<WriteOrdering>,
}

impl SetPayload {
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            points: None,
            filter: None,
            wait: None,
            ordering: None,
        }
    }

    pub fn points(mut self, points: Vec<PointId>) -> Self {
        self.points = Some(points);
        self
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }
}

write_options!(SetPayload);

/// Request body for `POST /collections/{name}/points/payload/delete`.
#[derive(Debug, Clone, Serialize)]
pub struct DeletePayload {
    pub keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<PointId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip)]
    pub wait: Option<bool>,
    #[serde(skip)]
    pub ordering: Option<WriteOrdering>,
}

impl DeletePayload {
    pub fn new<K: Into<String>>(keys: impl IntoIterator<Item = K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            points: None,
            filter: None,
            wait: None,
            ordering: None,
        }
    }

    pub fn points(mut self, points: Vec<PointId>) -> Self {
        self.points = Some(points);
        self
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }
}

write_options!(DeletePayload);

/// Request body for `POST /collections/{name}/points/payload/clear`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClearPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<PointId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip)]
    pub wait: Option<bool>,
    #[serde(skip)]
    pub ordering: Option<WriteOrdering>,
}

impl ClearPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(mut self, points: Vec<PointId>) -> Self {
        self.points = Some(points);
        self
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }
}

write_options!(ClearPayload);

// ---------------------------------------------------------------------------
// Scroll / search / recommend / count
// ---------------------------------------------------------------------------

/// Request body for `POST /collections/{name}/points/scroll`.
#[derive(Debug, Clone, Serialize)]
pub struct ScrollPoints {
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// Cursor: the `next_page_offset` returned by the previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<PointId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_vector: Option<Value>,
    #[serde(skip)]
    pub consistency: Option<ReadConsistency>,
}

impl ScrollPoints {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            filter: None,
            offset: None,
            with_payload: None,
            with_vector: None,
            consistency: None,
        }
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn offset(mut self, offset: impl Into<PointId>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn with_payload(mut self, selector: impl Into<Value>) -> Self {
        self.with_payload = Some(selector.into());
        self
    }

    pub fn with_vector(mut self, selector: impl Into<Value>) -> Self {
        self.with_vector = Some(selector.into());
        self
    }
}

read_options!(ScrollPoints);

/// A nearest-neighbour query; also the element type of [`SearchBatch`].
#[derive(Debug, Clone, Serialize)]
pub struct SearchPoints {
    /// A dense vector, or `{"name": ..., "vector": [...]}` for named vectors.
    pub vector: Value,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_vector: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<f32>,
    #[serde(skip)]
    pub consistency: Option<ReadConsistency>,
}

impl SearchPoints {
    pub fn new(vector: impl Into<Value>, limit: u64) -> Self {
        Self {
            vector: vector.into(),
            limit,
            filter: None,
            params: None,
            offset: None,
            with_payload: None,
            with_vector: None,
            score_threshold: None,
            consistency: None,
        }
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Search parameters such as `{"hnsw_ef": 128, "exact": false}`.
    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_payload(mut self, selector: impl Into<Value>) -> Self {
        self.with_payload = Some(selector.into());
        self
    }

    pub fn with_vector(mut self, selector: impl Into<Value>) -> Self {
        self.with_vector = Some(selector.into());
        self
    }

    pub fn score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = Some(threshold);
        self
    }
}

read_options!(SearchPoints);

/// Request body for `POST /collections/{name}/points/search/batch`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchBatch {
    pub searches: Vec<SearchPoints>,
    #[serde(skip)]
    pub consistency: Option<ReadConsistency>,
}

impl SearchBatch {
    pub fn new(searches: Vec<SearchPoints>) -> Self {
        Self {
            searches,
            consistency: None,
        }
    }
}

read_options!(SearchBatch);

/// Example-based query; also the element type of [`RecommendBatch`].
#[derive(Debug, Clone, Serialize)]
pub struct RecommendPoints {
    pub positive: Vec<PointId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative: Option<Vec<PointId>>,
    pub limit: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_vector: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<f32>,
    /// Named vector to compare against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub using: Option<String>,
    /// Collection holding the example points, e.g. `{"collection": "c2"}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_from: Option<Value>,
    #[serde(skip)]
    pub consistency: Option<ReadConsistency>,
}

impl RecommendPoints {
    pub fn new(positive: Vec<PointId>, limit: u64) -> Self {
        Self {
            positive,
            negative: None,
            limit,
            filter: None,
            params: None,
            offset: None,
            with_payload: None,
            with_vector: None,
            score_threshold: None,
            using: None,
            lookup_from: None,
            consistency: None,
        }
    }

    pub fn negative(mut self, negative: Vec<PointId>) -> Self {
        self.negative = Some(negative);
        self
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_payload(mut self, selector: impl Into<Value>) -> Self {
        self.with_payload = Some(selector.into());
        self
    }

    pub fn with_vector(mut self, selector: impl Into<Value>) -> Self {
        self.with_vector = Some(selector.into());
        self
    }

    pub fn score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = Some(threshold);
        self
    }

    pub fn using(mut self, vector_name: impl Into<String>) -> Self {
        self.using = Some(vector_name.into());
        self
    }

    pub fn lookup_from(mut self, location: Value) -> Self {
        self.lookup_from = Some(location);
        self
    }
}

read_options!(RecommendPoints);

/// Request body for `POST /collections/{name}/points/recommend/batch`.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendBatch {
    pub searches: Vec<RecommendPoints>,
    #[serde(skip)]
    pub consistency: Option<ReadConsistency>,
}

impl RecommendBatch {
    pub fn new(searches: Vec<RecommendPoints>) -> Self {
        Self {
            searches,
            consistency: None,
        }
    }
}

read_options!(RecommendBatch);

/// Request body for `POST /collections/{name}/points/count`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CountPoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    /// Exact count instead of the cheaper estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
}

impl CountPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = Some(exact);
        self
    }
}
