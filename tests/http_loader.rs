mod common;

use catalog_editor::catalog::ProductId;
use catalog_editor::config::SourceConfig;
use catalog_editor::loader::{load_or_empty, CatalogSource, FileSource, HttpSource, LoadError};
use common::mock_source::{MockProductServer, MockResponse};
use common::{temp_products_file, TWO_PRODUCTS_JSON};

fn source_for(server: &MockProductServer) -> HttpSource {
    let config = SourceConfig {
        url: server.products_url(),
        ..SourceConfig::default()
    };
    HttpSource::new(&config).expect("Failed to build source")
}

#[tokio::test]
async fn fetch_keeps_remote_order_and_first_image() {
    let server = MockProductServer::start().await;
    server
        .enqueue_response(MockResponse::json(TWO_PRODUCTS_JSON))
        .await;

    let products = source_for(&server).fetch().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId(1));
    assert_eq!(products[0].title, "Essence Mascara");
    assert_eq!(
        products[0].image_url.as_deref(),
        Some("https://cdn.example/1.png")
    );
    assert_eq!(products[1].id, ProductId(2));
    assert_eq!(products[1].image_url, None);
    assert_eq!(server.hits().await, 1);
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockProductServer::start().await;
    server
        .enqueue_response(MockResponse::error(500, "boom"))
        .await;

    let result = source_for(&server).fetch().await;

    assert!(matches!(result, Err(LoadError::Status { status: 500, .. })));
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let server = MockProductServer::start().await;
    server
        .enqueue_response(MockResponse::json(r#"{"items": []}"#))
        .await;

    let result = source_for(&server).fetch().await;

    assert!(matches!(result, Err(LoadError::Parse { .. })));
}

#[tokio::test]
async fn failed_load_yields_empty_catalog() {
    let server = MockProductServer::start().await;
    server
        .enqueue_response(MockResponse::error(503, "unavailable"))
        .await;

    let products = load_or_empty(&source_for(&server)).await;

    assert!(products.is_empty());
}

#[tokio::test]
async fn request_timeout_is_honored() {
    let server = MockProductServer::start().await;
    server
        .enqueue_response(MockResponse::json(TWO_PRODUCTS_JSON).with_delay(3_000))
        .await;
    let config = SourceConfig {
        url: server.products_url(),
        request_timeout_seconds: Some(1),
        ..SourceConfig::default()
    };
    let source = HttpSource::new(&config).unwrap();

    let result = source.fetch().await;

    assert!(matches!(result, Err(LoadError::Request { .. })));
}

#[tokio::test]
async fn unreachable_host_yields_empty_catalog() {
    let config = SourceConfig {
        url: "http://127.0.0.1:9/products".to_string(),
        connect_timeout_seconds: 1,
        ..SourceConfig::default()
    };
    let source = HttpSource::new(&config).unwrap();

    assert!(load_or_empty(&source).await.is_empty());
}

#[tokio::test]
async fn file_source_reads_saved_list() {
    let (_dir, path) = temp_products_file(TWO_PRODUCTS_JSON);

    let products = FileSource::new(&path).fetch().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[1].title, "Eyeshadow Palette");
    assert_eq!(products[1].description, "Twelve shades");
}

#[tokio::test]
async fn missing_file_is_reported() {
    let dir = tempfile::TempDir::new().unwrap();
    let source = FileSource::new(dir.path().join("absent.json"));

    assert!(matches!(source.fetch().await, Err(LoadError::Read { .. })));
    assert!(load_or_empty(&source).await.is_empty());
}
