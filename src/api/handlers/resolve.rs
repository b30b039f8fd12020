//! Handler for explicit short URL resolution.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Query, State, rejection::QueryRejection},
    http::HeaderMap,
    response::Response,
};

use crate::api::dto::params::GetLongUrlParams;
use crate::api::handlers::redirect::{access_metadata, found};
use crate::application::dto::ResolveRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a full short URL (or bare id) and redirects to the long URL.
///
/// # Endpoint
///
/// `GET /v1/getLongUrl?shortUrl=http://localhost:8080/aB3dE5f`
///
/// # Errors
///
/// - 400 Bad Request if `shortUrl` is missing or empty
/// - 404 Not Found if no short URL matches
/// - 410 Gone if the short URL is deactivated or expired
pub async fn get_long_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    params: Result<Query<GetLongUrlParams>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(params) = params?;

    let req = ResolveRequest {
        short_url: params.short_url,
        user_metadata: Some(access_metadata(addr, &headers)),
    };

    let long_url = state.short_url_service.resolve(req).await?;

    Ok(found(&long_url))
}
