//! API route configuration.

use crate::api::handlers::{
    create_short_url_handler, deactivate_handler, delete_short_url_handler,
    get_long_url_handler, list_short_urls_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Public short URL endpoints, nested under `/v1`.
///
/// # Endpoints
///
/// - `POST /createShortUrl` - Create a short URL
/// - `GET  /getLongUrl`     - Resolve `?shortUrl=` and redirect
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/createShortUrl", post(create_short_url_handler))
        .route("/getLongUrl", get(get_long_url_handler))
}

/// Administrative endpoints, nested under `/admin`.
///
/// # Endpoints
///
/// - `GET    /shorturls`      - List every short URL
/// - `DELETE /deactivate`     - Deactivate `?id=`
/// - `DELETE /shorturls/{id}` - Permanently remove a short URL
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturls", get(list_short_urls_handler))
        .route("/shorturls/{id}", delete(delete_short_url_handler))
        .route("/deactivate", delete(deactivate_handler))
}
