//! Collection models: creation, parameter updates, indexes and snapshots.
//!
//! Nested configuration objects (HNSW, WAL, optimizers, quantization, ...) are
//! passed through as raw JSON; the server owns their schema.

use serde::Serialize;
use serde_json::Value;

use super::common::{WaitParams, WriteOrdering, WriteParams};

/// Request body for `PUT /collections/{name}`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCollection {
    /// Vector parameters, e.g. `{"size": 4, "distance": "Dot"}`.
    pub vectors: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sparse_vectors: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_consistency_factor: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_disk_payload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hnsw_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wal_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimizers_config: Option<Value>,
    /// Source collection to copy data from, e.g. `{"collection": "old"}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_from: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantization_config: Option<Value>,
}

impl CreateCollection {
    pub fn new(vectors: Value) -> Self {
        Self {
            vectors,
            sparse_vectors: None,
            shard_number: None,
            replication_factor: None,
            write_consistency_factor: None,
            on_disk_payload: None,
            hnsw_config: None,
            wal_config: None,
            optimizers_config: None,
            init_from: None,
            quantization_config: None,
        }
    }

    pub fn sparse_vectors(mut self, config: Value) -> Self {
        self.sparse_vectors = Some(config);
        self
    }

    pub fn shard_number(mut self, shards: u32) -> Self {
        self.shard_number = Some(shards);
        self
    }

    pub fn replication_factor(mut self, factor: u32) -> Self {
        self.replication_factor = Some(factor);
        self
    }

    pub fn write_consistency_factor(mut self, factor: u32) -> Self {
        self.write_consistency_factor = Some(factor);
        self
    }

    /// Keep payloads on disk instead of in RAM.
    pub fn on_disk_payload(mut self, on_disk: bool) -> Self {
        self.on_disk_payload = Some(on_disk);
        self
    }

    pub fn hnsw_config(mut self, config: Value) -> Self {
        self.hnsw_config = Some(config);
        self
    }

    pub fn wal_config(mut self, config: Value) -> Self {
        self.wal_config = Some(config);
        self
    }

    pub fn optimizers_config(mut self, config: Value) -> Self {
        self.optimizers_config = Some(config);
        self
    }

    pub fn init_from(mut self, source: Value) -> Self {
        self.init_from = Some(source);
        self
    }

    pub fn quantization_config(mut self, config: Value) -> Self {
        self.quantization_config = Some(config);
        self
    }
}

/// Request body for `PATCH /collections/{name}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCollection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimizers_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl UpdateCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optimizers_config(mut self, config: Value) -> Self {
        self.optimizers_config = Some(config);
        self
    }

    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }
}

/// Request body for `POST /collections/aliases`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateAliases {
    /// Alias operations, e.g. `{"create_alias": {...}}`, applied atomically.
    pub actions: Vec<Value>,
}

/// Request body for `PUT /collections/{name}/index`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFieldIndex {
    pub field_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_schema: Option<Value>,
    #[serde(skip)]
    pub wait: Option<bool>,
    #[serde(skip)]
    pub ordering: Option<WriteOrdering>,
}

impl CreateFieldIndex {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_schema: None,
            wait: None,
            ordering: None,
        }
    }

    /// Field type, e.g. `"keyword"` or a full schema object.
    pub fn field_schema(mut self, schema: impl Into<Value>) -> Self {
        self.field_schema = Some(schema.into());
        self
    }

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

/// Request body for `POST /collections/{name}/cluster`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateCollectionCluster {
    /// e.g. `{"shard_id": 0, "from_peer_id": 1, "to_peer_id": 2}`.
    pub move_shard: Value,
}

/// Request body for `POST /collections/{name}/snapshots/recover`.
#[derive(Debug, Clone, Serialize)]
pub struct RestoreSnapshot {
    /// URL or `file://` path of the snapshot to recover from.
    pub location: String,
    /// `"snapshot"` or `"replica"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip)]
    pub wait: Option<bool>,
}

impl RestoreSnapshot {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            priority: None,
            wait: None,
        }
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn wait(mut self, wait: bool) -> Self {
        self.wait = Some(wait);
        self
    }

    pub(crate) fn wait_params(&self) -> WaitParams {
        WaitParams { wait: self.wait }
    }
}
