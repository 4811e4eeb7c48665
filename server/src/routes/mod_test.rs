use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

fn public_fixture(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("marquee-public-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("placeholder-image.jpg"), b"\xFF\xD8\xFF\xD9").unwrap();
    dir
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn healthz_is_ok() {
    let router = static_routes(&public_fixture("healthz"));
    assert_eq!(status_of(router, "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn placeholder_poster_is_served() {
    let router = static_routes(&public_fixture("poster"));
    assert_eq!(status_of(router, "/placeholder-image.jpg").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_file_is_not_found() {
    let router = static_routes(&public_fixture("missing"));
    assert_eq!(status_of(router, "/nope.png").await, StatusCode::NOT_FOUND);
}

#[test]
fn route_error_names_leptos() {
    let err = RouteError::LeptosConfig("missing site root".to_owned());
    assert_eq!(err.to_string(), "leptos configuration: missing site root");
}
