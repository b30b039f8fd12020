//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: Counts stored short URLs
/// 2. **Key buffer**: Reports pre-generated identifiers (an empty buffer is not
///    an error, identifiers are then synthesized on demand)
/// 3. **Analytics queue**: Checks if the channel is open and reports free slots
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Short URLs: 42" },
///     "key_buffer": { "status": "ok", "message": "Buffered: 1000" },
///     "analytics_queue": { "status": "ok", "message": "Capacity: 10000" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let buffer_check = CheckStatus::ok(format!("Buffered: {}", state.key_generator.buffered()));
    let queue_check = check_analytics_queue(&state);

    let all_healthy = store_check.is_ok() && queue_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            key_buffer: buffer_check,
            analytics_queue: queue_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    match state.repository.count().await {
        Ok(count) => CheckStatus::ok(format!("Short URLs: {count}")),
        Err(e) => CheckStatus::error(format!("Store error: {e}")),
    }
}

fn check_analytics_queue(state: &AppState) -> CheckStatus {
    if state.analytics.is_closed() {
        CheckStatus::error("Analytics queue is closed")
    } else {
        CheckStatus::ok(format!("Capacity: {}", state.analytics.capacity()))
    }
}
