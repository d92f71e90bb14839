use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use isomer_server::Server;
use std::path::Path;
use tower::ServiceExt;

fn test_router(static_dir: &Path) -> Router {
    Server::builder().static_dir(static_dir).build().expect("server build").router()
}

async fn get(app: Router, path: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::get(path).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().expect("header utf8").to_owned());
    let body = response.into_body().collect().await.expect("body").to_bytes().to_vec();

    (status, content_type, body)
}

#[tokio::test]
async fn root_route_renders_the_ssr_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, content_type, body) = get(test_router(dir.path()), "/").await;
    let html = String::from_utf8(body).expect("utf8 body");

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.expect("content type").starts_with("text/html"));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Hello, SSR!"));
}

#[tokio::test]
async fn every_route_renders_with_ssr_mode() {
    let dir = tempfile::tempdir().expect("tempdir");

    for path in ["/", "/about", "/contact"] {
        let (status, _, body) = get(test_router(dir.path()), path).await;
        let html = String::from_utf8(body).expect("utf8 body");

        assert_eq!(status, StatusCode::OK, "unexpected status for {path}");
        assert!(html.contains("Hello, SSR!"), "missing heading for {path}");
    }
}

#[tokio::test]
async fn unknown_path_still_answers_with_the_shell() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, _, body) = get(test_router(dir.path()), "/no/such/route").await;
    let html = String::from_utf8(body).expect("utf8 body");

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<nav"));
    assert!(!html.contains("Hello,"), "no page should render for an unknown path");
}

#[tokio::test]
async fn static_asset_bytes_are_served_verbatim() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = b"console.log('bundle');\n";
    std::fs::write(dir.path().join("bundle.js"), bundle).expect("write asset");

    let (status, content_type, body) = get(test_router(dir.path()), "/bundle.js").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.expect("content type").contains("javascript"));
    assert_eq!(body, bundle.to_vec(), "asset must bypass the render path");
}

#[tokio::test]
async fn missing_asset_falls_through_to_the_render() {
    let dir = tempfile::tempdir().expect("tempdir");
    let (status, _, body) = get(test_router(dir.path()), "/missing-bundle.js").await;
    let html = String::from_utf8(body).expect("utf8 body");

    assert_eq!(status, StatusCode::OK);
    assert!(html.starts_with("<!DOCTYPE html>"), "expected the rendered document, got: {html}");
}

#[tokio::test]
async fn concurrent_requests_render_independently() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_router(dir.path());

    let (home, about) = tokio::join!(get(app.clone(), "/"), get(app, "/about"));

    let home_html = String::from_utf8(home.2).expect("utf8 body");
    let about_html = String::from_utf8(about.2).expect("utf8 body");

    assert!(home_html.contains("home page"));
    assert!(!home_html.contains("about the demo"));
    assert!(about_html.contains("about the demo"));
    assert!(!about_html.contains("home page"));
}

#[tokio::test]
async fn health_endpoint_reports_up() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = test_router(dir.path());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let cache = response
        .headers()
        .get(header::CACHE_CONTROL)
        .map(|value| value.to_str().expect("header utf8").to_owned())
        .unwrap_or_default();
    assert!(cache.contains("no-store"));

    let body = response.into_body().collect().await.expect("body").to_bytes();
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(payload["status"], "up");
}
