mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use short_url::api::handlers::health_handler;
use short_url::domain::id_generator::IdGenerator;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (state, _rx) = common::create_test_state();
    state.key_generator.refill_buffer().unwrap();

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert_eq!(json["checks"]["store"]["message"], "Short URLs: 0");
    assert_eq!(json["checks"]["key_buffer"]["message"], "Buffered: 1000");
    assert_eq!(json["checks"]["analytics_queue"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_when_analytics_closed() {
    let (state, rx) = common::create_test_state();
    drop(rx);

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["analytics_queue"]["status"], "error");
}
