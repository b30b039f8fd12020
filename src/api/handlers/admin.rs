//! Administrative handlers.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
};

use crate::api::dto::params::DeactivateParams;
use crate::application::dto::ShortUrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every short URL.
///
/// # Endpoint
///
/// `GET /admin/shorturls`
pub async fn list_short_urls_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ShortUrlResponse>>, AppError> {
    let urls = state.short_url_service.list().await?;
    Ok(Json(urls))
}

/// Deactivates a short URL. Its entry is kept but no longer resolves.
///
/// # Endpoint
///
/// `DELETE /admin/deactivate?id=aB3dE5f`
///
/// # Errors
///
/// - 400 Bad Request if `id` is missing or empty
/// - 404 Not Found if no short URL matches
pub async fn deactivate_handler(
    State(state): State<AppState>,
    params: Result<Query<DeactivateParams>, QueryRejection>,
) -> Result<StatusCode, AppError> {
    let Query(params) = params?;

    state.short_url_service.deactivate(&params.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Permanently removes a short URL.
///
/// # Endpoint
///
/// `DELETE /admin/shorturls/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no short URL matches.
pub async fn delete_short_url_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.short_url_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
