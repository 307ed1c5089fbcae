//! Integration tests for the search module.
//!
//! These tests verify the page-fetch contract with mock HTTP servers.

use pexfetch_core::{FetchError, PageOutcome, SearchClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn one_photo_json() -> serde_json::Value {
    serde_json::json!({
        "page": 1,
        "photos": [
            {
                "id": 2014422,
                "photographer": "Joey Farina",
                "src": {
                    "original": "https://images.example.com/2014422.jpeg",
                    "tiny": "https://images.example.com/2014422-tiny.jpeg"
                }
            }
        ]
    })
}

#[tokio::test]
async fn test_fetch_page_full_contract() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "nature"))
        .and(query_param("per_page", "80"))
        .and(query_param("page", "1"))
        .and(header("authorization", "integration-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(one_photo_json()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SearchClient::with_base_url("integration-key", mock_server.uri());
    let outcome = client.fetch_page("nature", 80, 1).await.unwrap();

    match outcome {
        PageOutcome::Page(page) => {
            assert_eq!(page.page_number, 1);
            assert_eq!(page.photos.len(), 1);
            assert_eq!(page.photos[0].id, 2_014_422);
            assert_eq!(
                page.photos[0].src.original,
                "https://images.example.com/2014422.jpeg"
            );
        }
        PageOutcome::End => panic!("Expected a page, got End"),
    }
}

#[tokio::test]
async fn test_fetch_page_server_error_is_fatal_fetch_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = SearchClient::with_base_url("integration-key", mock_server.uri());
    let result = client.fetch_page("nature", 80, 4).await;

    match result {
        Err(FetchError::Status { status, page, .. }) => {
            assert_eq!(status, 503);
            assert_eq!(page, 4);
        }
        other => panic!("Expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_page_unreachable_server_is_network_error() {
    // Nothing listens on this port; connection is refused immediately.
    let client = SearchClient::with_base_url("key", "http://127.0.0.1:9");
    let result = client.fetch_page("nature", 80, 1).await;

    assert!(
        matches!(result, Err(FetchError::Network { .. })),
        "connection refused must surface as a network fetch error"
    );
}

#[tokio::test]
async fn test_fetch_page_empty_and_missing_lists_end_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"photos": []})))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"total_results": 0})),
        )
        .mount(&mock_server)
        .await;

    let client = SearchClient::with_base_url("integration-key", mock_server.uri());
    assert!(matches!(
        client.fetch_page("nature", 80, 1).await.unwrap(),
        PageOutcome::End
    ));
    assert!(matches!(
        client.fetch_page("nature", 80, 2).await.unwrap(),
        PageOutcome::End
    ));
}
