//! # qdrant-rest
//!
//! An async client for the **Qdrant** vector database REST API. Every method
//! builds one HTTP request (path, query string, JSON body), sends it, and
//! returns the server's JSON response unchanged as a [`serde_json::Value`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qdrant_rest::{CreateCollection, PointStruct, QdrantClient, SearchPoints, UpsertPoints};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), qdrant_rest::QdrantError> {
//!     let client = QdrantClient::builder("http://localhost:6333")
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     client
//!         .collections()
//!         .create("cities", CreateCollection::new(json!({ "size": 4, "distance": "Dot" })))
//!         .await?;
//!
//!     client
//!         .points()
//!         .upsert(
//!             "cities",
//!             UpsertPoints::points(vec![
//!                 PointStruct::new(1, vec![0.05_f32, 0.61, 0.76, 0.74])
//!                     .payload(json!({ "city": "Berlin" })),
//!             ])
//!             .wait(true),
//!         )
//!         .await?;
//!
//!     let hits = client
//!         .points()
//!         .search("cities", SearchPoints::new(vec![0.2_f32, 0.1, 0.9, 0.7], 3))
//!         .await?;
//!     println!("{hits}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! | Sub-client | Access | Purpose |
//! |------------|--------|---------|
//! | [`AliasesClient`] | `client.aliases()` | Deployment-wide alias listing |
//! | [`CollectionsClient`] | `client.collections()` | Collections, indexes, shards, collection snapshots |
//! | [`PointsClient`] | `client.points()` | Upserts, payloads, scroll, search, recommend, count |
//! | [`ClustersClient`] | `client.clusters()` | Cluster status and Raft recovery |
//! | [`ServiceClient`] | `client.service()` | Telemetry, metrics, write lock |
//! | [`SnapshotsClient`] | `client.snapshots()` | Whole-storage snapshots |
//!
//! Optional request fields are only sent when set, so the server's defaults
//! apply to everything left out. Non-2xx responses are returned as data unless
//! the client is built with `raise_on_error(true)`.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
mod transport;

pub use client::{QdrantClient, QdrantClientBuilder};
pub use config::{load_config, ClientConfig};
pub use endpoints::{
    AliasesClient, ClustersClient, CollectionsClient, PointsClient, ServiceClient,
    SnapshotsClient,
};
pub use error::{QdrantError, QdrantResult};
pub use models::*;
