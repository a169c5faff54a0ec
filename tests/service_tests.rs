//! Service, cluster, aliases and storage snapshot endpoints.

mod common;

use common::{setup, status_ok};
use qdrant_rest::{QdrantClient, QdrantError, SetLock};
use serde_json::json;
use std::io;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// -- Service ------------------------------------------------------------------

#[tokio::test]
async fn test_telemetry_anonymized() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/telemetry"))
        .and(query_param("anonymize", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "id": "abc", "app": { "name": "qdrant" } },
            "status": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.service().telemetry(Some(true)).await.expect("telemetry");
    assert_eq!(response["result"]["app"]["name"], "qdrant");
}

#[tokio::test]
async fn test_telemetry_explicit_false_is_sent() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/telemetry"))
        .and(query_param("anonymize", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_ok()))
        .expect(1)
        .mount(&server)
        .await;

    client.telemetry(Some(false)).await.expect("telemetry");
}

#[tokio::test]
async fn test_metrics_text_is_returned_as_string() {
    let (server, client) = setup().await;
    let exposition = "# HELP app_info information about qdrant server\napp_info{name=\"qdrant\"} 1\n";
    Mock::given(method("GET"))
        .and(path("/metrics"))
        .and(query_param_is_missing("anonymize"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(exposition, "text/plain; version=0.0.4"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client.metrics(None).await.expect("metrics");
    assert_eq!(response.as_str(), Some(exposition));
}

#[tokio::test]
async fn test_locks_and_set_lock() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/locks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "write": false, "error_message": null },
            "status": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/locks"))
        .and(body_json(json!({ "write": true, "error_message": "maintenance" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "write": false, "error_message": null },
            "status": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let current = client.locks().await.expect("locks");
    assert_eq!(current["result"]["write"], false);
    let previous = client
        .set_lock(SetLock::new(true).error_message("maintenance"))
        .await
        .expect("set_lock");
    assert_eq!(previous["result"]["write"], false);
}

// -- Clusters -----------------------------------------------------------------

#[tokio::test]
async fn test_cluster_info_and_recover() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/cluster"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "status": "disabled" },
            "status": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/cluster/recover"))
        .and(query_param_is_missing("force"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_ok()))
        .expect(1)
        .mount(&server)
        .await;

    let info = client.clusters().info().await.expect("info");
    assert_eq!(info["result"]["status"], "disabled");
    client.clusters().recover().await.expect("recover");
}

#[tokio::test]
async fn test_remove_peer_posts_to_recover() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/cluster/recover"))
        .and(query_param("force", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_ok()))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .clusters()
        .remove_peer(7, Some(true))
        .await
        .expect("remove_peer");
    assert_eq!(response, status_ok());
}

// -- Aliases ------------------------------------------------------------------

#[tokio::test]
async fn test_list_all_aliases() {
    let (server, client) = setup().await;
    let body = json!({
        "result": { "aliases": [{ "alias_name": "prod", "collection_name": "c" }] },
        "status": "ok"
    });
    Mock::given(method("GET"))
        .and(path("/aliases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.aliases().list().await.expect("aliases"), body);
}

// -- Storage snapshots --------------------------------------------------------

#[tokio::test]
async fn test_storage_snapshots() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/snapshots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{ "name": "full-1.snapshot" }],
            "status": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/snapshots"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "name": "full-2.snapshot" },
            "status": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let listed = client.snapshots().list().await.expect("list");
    assert_eq!(listed["result"][0]["name"], "full-1.snapshot");
    let created = client.snapshots().create().await.expect("create");
    assert_eq!(created["result"]["name"], "full-2.snapshot");
}

#[tokio::test]
async fn test_delete_storage_snapshot_passes_body_through() {
    let (server, client) = setup().await;
    let body = json!({ "result": true, "status": "ok", "time": 0.25 });
    Mock::given(method("DELETE"))
        .and(path("/snapshots/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(client.snapshots().delete("s1").await.expect("delete"), body);
}

#[tokio::test]
async fn test_download_storage_snapshot() {
    let (server, client) = setup().await;
    let bytes = b"QDRANT\x00SNAPSHOT\x01\x02".to_vec();
    Mock::given(method("GET"))
        .and(path("/snapshots/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("s1.snapshot");
    let written = client
        .snapshots()
        .download("s1", &target)
        .await
        .expect("download");

    assert_eq!(written, bytes.len() as u64);
    assert_eq!(std::fs::read(&target).expect("read back"), bytes);
}

#[tokio::test]
async fn test_download_into_missing_directory_fails_with_io() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/snapshots/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"data".to_vec()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("missing").join("s1.snapshot");
    let err = client
        .snapshots()
        .download("s1", &target)
        .await
        .expect_err("parent directory does not exist");
    assert!(matches!(err, QdrantError::Io(_)));
}

/// In-memory sink for a scoped `fmt` subscriber.
#[derive(Clone, Default)]
struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_download_streams_large_body_without_logging_it() {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let server = MockServer::start().await;
    let bytes = vec![b'Q'; 100_000];
    Mock::given(method("GET"))
        .and(path("/snapshots/big"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes.clone()))
        .expect(1)
        .mount(&server)
        .await;
    let client = QdrantClient::builder(&server.uri())
        .log_requests(true)
        .build()
        .expect("client init");

    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("big.snapshot");
    let written = client
        .snapshots()
        .download("big", &target)
        .await
        .expect("download");

    assert_eq!(written, 100_000);
    assert_eq!(std::fs::read(&target).expect("read back"), bytes);

    let log = String::from_utf8(capture.0.lock().unwrap().clone()).expect("utf8 log");
    assert!(log.contains("bytes=100000"), "log: {log}");
    assert!(!log.contains(&"Q".repeat(64)));
    assert!(log.len() < 10_000);
}

#[tokio::test]
async fn test_download_raises_before_creating_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/snapshots/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": { "error": "Snapshot not found" }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = QdrantClient::builder(&server.uri())
        .raise_on_error(true)
        .build()
        .expect("client init");

    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("gone.snapshot");
    let err = client
        .snapshots()
        .download("gone", &target)
        .await
        .expect_err("404 must raise");

    assert_eq!(err.status(), Some(404));
    assert!(matches!(err, QdrantError::Api { ref message, .. } if message.contains("Snapshot not found")));
    assert!(!target.exists());
}
