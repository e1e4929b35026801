//! Router Configuration
//!
//! Route configuration for the update endpoints and the static site.

use std::path::Path;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{handlers, state::AppState};

pub const UPDATE_SITE_ROUTE: &str = "/.netlify/functions/update-site";
pub const WEBHOOK_ROUTE: &str = "/webhook-handler.php";

/// Create the main router with all routes.
///
/// With a `site_dir`, any path not matched by a route is served from it.
pub fn create_router(state: AppState, site_dir: Option<&Path>) -> Router {
    let endpoints = Router::new()
        .route(
            UPDATE_SITE_ROUTE,
            post(handlers::update_site::update_site)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            WEBHOOK_ROUTE,
            post(handlers::webhook::webhook)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .layer(middleware::map_response(handlers::with_cors_headers));

    let router = Router::new()
        .merge(endpoints)
        .route("/health", get(handlers::health));

    let router = match site_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
