//! Shared helpers for the endpoint integration tests.

#![allow(dead_code)]

use qdrant_rest::QdrantClient;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const API_KEY: &str = "123";

/// Install a test subscriber once; `RUST_LOG=qdrant_rest=debug` shows requests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, QdrantClient) {
    init_tracing();
    let server = MockServer::start().await;
    let client = QdrantClient::builder(&server.uri())
        .api_key(API_KEY)
        .log_requests(true)
        .build()
        .expect("client init");
    (server, client)
}

pub fn status_ok() -> Value {
    json!({ "result": true, "status": "ok", "time": 0.001 })
}

pub fn update_result() -> Value {
    json!({
        "result": { "operation_id": 0, "status": "completed" },
        "status": "ok",
        "time": 0.002
    })
}
