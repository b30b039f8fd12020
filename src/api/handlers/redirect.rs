//! Handler for short URL redirect.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::application::dto::ResolveRequest;
use crate::domain::entities::Metadata;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its long URL.
///
/// # Endpoint
///
/// `GET /{id}`
///
/// The client address, `User-Agent` and `Referer` are attached to the
/// `url_accessed` analytics event.
///
/// # Errors
///
/// - 404 Not Found if the id doesn't exist
/// - 410 Gone if the short URL is deactivated or expired
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let req = ResolveRequest {
        short_url: id,
        user_metadata: Some(access_metadata(addr, &headers)),
    };

    let long_url = state.short_url_service.resolve(req).await?;

    Ok(found(&long_url))
}

/// Builds the analytics context for an access request.
pub(crate) fn access_metadata(addr: SocketAddr, headers: &HeaderMap) -> Metadata {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    };

    Metadata::from([
        ("ip".to_string(), Value::String(addr.ip().to_string())),
        (
            "user_agent".to_string(),
            Value::String(header_value(header::USER_AGENT)),
        ),
        (
            "referer".to_string(),
            Value::String(header_value(header::REFERER)),
        ),
    ])
}

/// `302 Found` pointing at `location`.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
