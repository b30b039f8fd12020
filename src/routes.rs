//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{id}`     - Short URL redirect
//! - `GET  /health`   - Health check: store, key buffer, analytics queue
//! - `/v1/*`          - Create and resolve short URLs
//! - `/admin/*`       - List, deactivate and delete short URLs
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/{id}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/v1", api::routes::v1_routes())
        .nest("/admin", api::routes::admin_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
