//! Catalog client and paginator tests against a mocked volumes API

use readinglist::domain::DomainError;
use readinglist::google_books::GoogleBooksClient;
use readinglist::services::reading_list_service;
use readinglist::services::search_service::{self, SearchQuery};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, api_key: Option<&str>) -> GoogleBooksClient {
    GoogleBooksClient::new(
        format!("{}/books/v1", server.uri()),
        api_key.map(str::to_string),
        Duration::from_secs(2),
    )
    .expect("Failed to build client")
}

fn volume(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "volumeInfo": {
            "title": title,
            "authors": ["Frank Herbert"],
            "publisher": "Chilton",
            "publishedDate": "1965",
            "imageLinks": { "thumbnail": format!("http://books.google.com/{}.jpg", id) }
        }
    })
}

#[tokio::test]
async fn test_search_sends_title_query_with_offset() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .and(query_param("q", "intitle:dune"))
        .and(query_param("maxResults", "21"))
        .and(query_param("startIndex", "42"))
        .and(query_param("printType", "books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "books#volumes",
            "totalItems": 250,
            "items": [volume("d1", "Dune"), volume("d2", "Dune Messiah")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let page = search_service::search(&client, SearchQuery::from_params(Some("dune"), Some("3")))
        .await;

    assert_eq!(page.current_page, 3);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.page_numbers, vec![1, 2, 3, 4, 5]);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].external_id, "d1");
    assert_eq!(page.items[1].title, "Dune Messiah");
    assert_eq!(page.items[0].authors, "Frank Herbert");
    assert_eq!(
        page.items[0].thumbnail_url.as_deref(),
        Some("http://books.google.com/d1.jpg")
    );
}

#[tokio::test]
async fn test_api_key_is_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .and(query_param("key", "k-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "totalItems": 0 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some("k-123"));
    let page =
        search_service::search(&client, SearchQuery::from_params(Some("zzzxxxqqq"), None)).await;

    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_server_error_degrades_to_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let page = search_service::search(&client, SearchQuery::from_params(Some("dune"), None)).await;

    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
    assert!(page.page_numbers.is_empty());
    assert_eq!(page.query, "dune");
}

#[tokio::test]
async fn test_garbled_body_degrades_to_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let page = search_service::search(&client, SearchQuery::from_params(Some("dune"), None)).await;

    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_slow_catalog_degrades_to_empty_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "totalItems": 1, "items": [volume("d1", "Dune")] }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = GoogleBooksClient::new(
        format!("{}/books/v1", server.uri()),
        None,
        Duration::from_millis(200),
    )
    .unwrap();
    let page = search_service::search(&client, SearchQuery::from_params(Some("dune"), None)).await;

    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_unreachable_catalog_degrades_to_empty_page() {
    // Nothing listens on this port once the server is dropped
    let server = MockServer::start().await;
    let client = client_for(&server, None);
    drop(server);

    let page = search_service::search(&client, SearchQuery::from_params(Some("dune"), None)).await;
    assert!(page.items.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_lookup_returns_volume_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "d1",
            "volumeInfo": {
                "title": "Dune",
                "description": "Desert planet.",
                "pageCount": 412,
                "categories": ["Fiction / Science Fiction"],
                "language": "en"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let detail = reading_list_service::lookup_volume(&client, "d1")
        .await
        .expect("volume exists");

    assert_eq!(detail.summary.external_id, "d1");
    assert_eq!(detail.summary.authors, "Unknown");
    assert_eq!(detail.description.as_deref(), Some("Desert planet."));
    assert_eq!(detail.page_count, Some(412));
}

#[tokio::test]
async fn test_lookup_failures_are_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/books/v1/volumes/flaky"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server, None);

    for id in ["missing", "flaky", "  "] {
        let result = reading_list_service::lookup_volume(&client, id).await;
        assert!(
            matches!(result, Err(DomainError::NotFound)),
            "lookup of {:?} should be not found",
            id
        );
    }
}
