//! Integration tests for the wiki's route surface.
//!
//! Drives the router directly with oneshot requests against the embedded
//! catalogue: listing pages, detail lookup, cross-linking, and the soft
//! not-found path.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use codex_server::{router, DataProvider};

async fn get(path: &str) -> (StatusCode, String) {
    let app = router(DataProvider::Embedded);
    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn home_page_lists_collections() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Civilizations"));
    assert!(body.contains("Victory Paths"));
}

#[tokio::test]
async fn listing_page_links_each_entity() {
    let (status, body) = get("/civilizations").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<a href="/civilizations/egypt">Egypt</a>"#));
    assert!(body.contains(r#"<a href="/civilizations/united-kingdom">United Kingdom</a>"#));
}

#[tokio::test]
async fn detail_page_resolves_dashed_name() {
    let (status, body) = get("/civilizations/united-kingdom").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("United Kingdom"));
    assert!(body.contains("Historical Relations"));
}

#[tokio::test]
async fn detail_prose_is_cross_linked() {
    let (status, body) = get("/civilizations/egypt").await;
    assert_eq!(status, StatusCode::OK);
    // The description mentions the War Chariot; the linker must anchor it.
    assert!(body.contains(r#"<a href="/units/War-Chariot">War Chariot</a>"#));
}

#[tokio::test]
async fn unknown_entity_renders_not_found_message() {
    let (status, body) = get("/civilizations/nonexistent-civ").await;
    // Soft not-found: a normal page, not an HTTP error.
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Civilization not found."));
}

#[tokio::test]
async fn unknown_collection_is_a_hard_404() {
    let (status, _) = get("/armies").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn victory_routes_serve_under_victory() {
    let (status, body) = get("/victory/domination").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Domination Victory"));

    let (status, _) = get("/victory_types/domination").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
