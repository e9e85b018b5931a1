use reel::catalog::{CatalogError, HttpPageSource, Movie, PageSource};
use tokio_test::{assert_err, assert_ok};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Serves `body` with status 200 at `/data/page<n>.json`
async fn serve_page(server: &MockServer, n: u32, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/data/page{}.json", n)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .mount(server)
        .await;
}

// ============================================================================
// HttpPageSource Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_page_decodes_hyphenated_fields() {
    let mock_server = MockServer::start().await;
    serve_page(
        &mock_server,
        1,
        r#"{"page":{"title":"Romantic Comedy","content-items":{"content":[
            {"name":"The Birds","poster-image":"poster1.jpg"},
            {"name":"Rear Window","poster-image":"poster2.jpg"}
        ]}}}"#,
    )
    .await;

    let source = HttpPageSource::new(mock_server.uri());
    let page = assert_ok!(source.fetch_page(1).await);

    assert_eq!(page.title, "Romantic Comedy");
    assert_eq!(
        page.movies,
        vec![
            Movie::new("The Birds", "poster1.jpg"),
            Movie::new("Rear Window", "poster2.jpg"),
        ]
    );
}

#[tokio::test]
async fn test_fetch_page_requests_numbered_resource() {
    let mock_server = MockServer::start().await;
    serve_page(
        &mock_server,
        7,
        r#"{"page":{"title":"Seven","content-items":{"content":[]}}}"#,
    )
    .await;

    let source = HttpPageSource::new(mock_server.uri());
    let page = assert_ok!(source.fetch_page(7).await);

    assert_eq!(page.title, "Seven");
    assert!(page.movies.is_empty());
}

#[tokio::test]
async fn test_fetch_page_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/page2.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let source = HttpPageSource::new(mock_server.uri());
    let error = assert_err!(source.fetch_page(2).await);

    assert_eq!(error, CatalogError::Status { status: 500 });
}

#[tokio::test]
async fn test_fetch_page_missing_resource() {
    // Nothing mounted: wiremock answers 404
    let mock_server = MockServer::start().await;

    let source = HttpPageSource::new(mock_server.uri());
    let error = assert_err!(source.fetch_page(99).await);

    assert_eq!(error, CatalogError::Status { status: 404 });
}

#[tokio::test]
async fn test_fetch_page_malformed_json() {
    let mock_server = MockServer::start().await;
    serve_page(&mock_server, 1, "{not json").await;

    let source = HttpPageSource::new(mock_server.uri());
    let error = assert_err!(source.fetch_page(1).await);

    assert!(matches!(error, CatalogError::Parse { .. }));
}

#[tokio::test]
async fn test_fetch_page_missing_poster_field() {
    let mock_server = MockServer::start().await;
    serve_page(
        &mock_server,
        1,
        r#"{"page":{"title":"T","content-items":{"content":[{"name":"No Poster"}]}}}"#,
    )
    .await;

    let source = HttpPageSource::new(mock_server.uri());
    let error = assert_err!(source.fetch_page(1).await);

    assert!(matches!(error, CatalogError::Parse { .. }));
    assert_eq!(error.page_title(), Some("T"));
}

#[tokio::test]
async fn test_fetch_page_unreachable_host() {
    // Port 9 (discard) is not expected to be listening
    let source = HttpPageSource::new("http://127.0.0.1:9");
    let error = assert_err!(source.fetch_page(1).await);

    assert!(matches!(error, CatalogError::Network(_)));
}
