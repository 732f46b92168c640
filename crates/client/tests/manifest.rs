//! Integration tests for manifest download and caching, against a mock
//! server serving a zipped SQLite snapshot.

use std::io::Write;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tricorn_client::{RestClient, Settings};

const CONTENT_PATH: &str = "/common/destiny2_content/sqlite/en/world_sql_content_abc123.content";

fn settings(server: &MockServer) -> Settings {
    Settings::builder("test-api-key")
        .platform_url(server.uri())
        .site_url(server.uri())
        .build()
        .unwrap()
}

/// Build a zipped single-table SQLite snapshot in memory, the shape the
/// remote serves for mobile world content.
fn zipped_snapshot(tempdir: &std::path::Path) -> Vec<u8> {
    let database_path = tempdir.join("fixture.sqlite3");
    let connection = rusqlite::Connection::open(&database_path).unwrap();
    connection
        .execute_batch(
            "CREATE TABLE DestinyInventoryItemDefinition (id INTEGER PRIMARY KEY, json TEXT);
             INSERT INTO DestinyInventoryItemDefinition (id, json)
             VALUES (1363886209, '{\"hash\": 1363886209, \"displayProperties\": {\"name\": \"Gjallarhorn\"}}');",
        )
        .unwrap();
    drop(connection);

    let mut archive = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    archive
        .start_file("world_sql_content_abc123.content", zip::write::SimpleFileOptions::default())
        .unwrap();
    archive.write_all(&std::fs::read(&database_path).unwrap()).unwrap();
    archive.finish().unwrap().into_inner()
}

async fn mount_index(server: &MockServer, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path("/Destiny2/Manifest/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Response": {
                "version": "230821.0",
                "mobileWorldContentPaths": { "en": CONTENT_PATH }
            },
            "ErrorCode": 1,
            "ErrorStatus": "Success",
            "Message": "Ok",
            "ThrottleSeconds": 0
        })))
        .expect(expected_hits)
        .mount(server)
        .await;
}

/// Validates the full download path: index lookup, archive fetch,
/// extraction, and a definition query over the opened snapshot.
///
/// Assertions:
/// - Confirms the extracted database answers a hash lookup.
/// - Confirms the archive is removed after extraction.
#[tokio::test]
async fn test_download_and_query() {
    let server = MockServer::start().await;
    let cache = tempfile::tempdir().unwrap();
    let body = zipped_snapshot(cache.path());

    mount_index(&server, 1).await;
    Mock::given(method("GET"))
        .and(path(CONTENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(settings(&server));
    let manifest = client.download_manifest_to(cache.path(), "en", false).await.unwrap();

    let rows = manifest
        .execute(
            "SELECT json FROM DestinyInventoryItemDefinition WHERE id = ?1",
            &[&1_363_886_209_i64],
        )
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0]["displayProperties"]["name"], "Gjallarhorn");

    assert!(manifest.path().exists());
    assert!(!cache.path().join("file.zip").exists());
}

/// Validates cache idempotence: a second download over an existing
/// snapshot performs no network traffic.
///
/// Assertions:
/// - Ensures the index and content routes are hit exactly once across
///   two calls.
#[tokio::test]
async fn test_download_is_idempotent() {
    let server = MockServer::start().await;
    let cache = tempfile::tempdir().unwrap();
    let body = zipped_snapshot(cache.path());

    mount_index(&server, 1).await;
    Mock::given(method("GET"))
        .and(path(CONTENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = RestClient::new(settings(&server));
    let first = client.download_manifest_to(cache.path(), "en", false).await.unwrap();
    let second = client.download_manifest_to(cache.path(), "en", false).await.unwrap();
    assert_eq!(first.path(), second.path());
}

/// Validates that `force` refetches over an existing snapshot.
///
/// Assertions:
/// - Ensures the content route is hit twice when the second call forces.
#[tokio::test]
async fn test_force_redownloads() {
    let server = MockServer::start().await;
    let cache = tempfile::tempdir().unwrap();
    let body = zipped_snapshot(cache.path());

    mount_index(&server, 2).await;
    Mock::given(method("GET"))
        .and(path(CONTENT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .expect(2)
        .mount(&server)
        .await;

    let client = RestClient::new(settings(&server));
    client.download_manifest_to(cache.path(), "en", false).await.unwrap();
    client.download_manifest_to(cache.path(), "en", true).await.unwrap();
}

/// Validates the error when the index lacks the requested locale.
///
/// Assertions:
/// - Confirms a manifest error naming the locale surfaces.
#[tokio::test]
async fn test_missing_locale() {
    let server = MockServer::start().await;
    mount_index(&server, 1).await;

    let client = RestClient::new(settings(&server));
    let err = client.fetch_manifest_path("fr").await.unwrap_err();
    match err {
        tricorn_client::TricornError::Manifest(message) => assert!(message.contains("fr")),
        other => panic!("expected Manifest error, got {other:?}"),
    }
}
