//! Handler for short URL creation.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::application::dto::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /v1/createShortUrl`
///
/// # Request Body
///
/// ```json
/// {
///   "longUrl": "https://example.com/some/long/path",
///   "customUrl": "my-promo",                 // optional
///   "expiry": "2030-01-01T00:00:00Z",        // optional
///   "userMetadata": { "campaign": "summer" } // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "http://localhost:8080/aB3dE5f" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request on malformed JSON or empty `longUrl`
/// - 409 Conflict if `customUrl` is already taken
pub async fn create_short_url_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShortUrlRequest>, JsonRejection>,
) -> Result<Json<CreateShortUrlResponse>, AppError> {
    let Json(req) = payload?;

    let response = state.short_url_service.create(req).await?;

    Ok(Json(response))
}
