//! Integration tests for the download module.
//!
//! These tests verify the image-writer contract with mock HTTP servers.

use pexfetch_core::{DownloadError, ImageClient, SaveOutcome};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a mock server with an image endpoint.
async fn setup_mock_image(path_str: &str, content: &[u8]) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_download_full_flow_preserves_content() {
    let content = b"\xff\xd8\xff\xe0 fake jpeg body with binary bytes \x00\x01\x02";
    let mock_server = setup_mock_image("/photos/77.jpeg", content).await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let destination = temp_dir.path().join("77.jpg");

    let client = ImageClient::new();
    let url = format!("{}/photos/77.jpeg", mock_server.uri());
    let outcome = client.save_to_path(&url, &destination).await;

    assert!(outcome.is_ok(), "Download should succeed: {:?}", outcome.err());
    assert!(destination.exists(), "Downloaded file should exist");

    let written = std::fs::read(&destination).expect("should read file");
    assert_eq!(
        written, content,
        "Bytes must be written raw, with no decoding or re-encoding"
    );
}

#[tokio::test]
async fn test_download_skip_makes_zero_network_calls() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let destination = temp_dir.path().join("99.jpg");
    std::fs::write(&destination, b"already here").expect("seed file");

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ImageClient::new();
    let url = format!("{}/photos/99.jpeg", mock_server.uri());
    let outcome = client.save_to_path(&url, &destination).await.unwrap();

    assert_eq!(outcome, SaveOutcome::Skipped);
}

#[tokio::test]
async fn test_download_handles_404_gracefully() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    Mock::given(method("GET"))
        .and(path("/photos/404.jpeg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = ImageClient::new();
    let url = format!("{}/photos/404.jpeg", mock_server.uri());
    let destination = temp_dir.path().join("404.jpg");
    let result = client.save_to_path(&url, &destination).await;

    match result {
        Err(DownloadError::HttpStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("Expected HttpStatus error, got: {other:?}"),
    }
    assert!(!destination.exists());
}
