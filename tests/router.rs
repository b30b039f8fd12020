mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use short_url::routes::app_router;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_route_with_trailing_slash() {
    let (state, _rx) = common::create_test_state();
    let app = app_router(state);

    let response = app
        .oneshot(Request::get("/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_v1_route() {
    let (state, _rx) = common::create_test_state();
    let app = app_router(state);

    let response = app
        .oneshot(Request::get("/v1/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_route_rejects_get() {
    let (state, _rx) = common::create_test_state();
    let app = app_router(state);

    let response = app
        .oneshot(Request::get("/v1/createShortUrl").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
