//! HTTP surface for the campus event catalog.

pub mod config;
pub mod routes;
pub mod state;

use std::path::Path;

use axum::{Router, routing::any};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
///
/// When `static_dir` points at an existing directory, files are served from
/// it and any other non-API path falls back to its `index.html`.
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .merge(routes::events::router())
        .merge(routes::health::router())
        .route("/api/{*path}", any(routes::api_not_found));

    match static_dir {
        Some(dir) if dir.is_dir() => {
            tracing::info!(dir = %dir.display(), "serving frontend");
            let index = ServeFile::new(dir.join("index.html"));
            router = router.fallback_service(ServeDir::new(dir).fallback(index));
        }
        Some(dir) => {
            tracing::warn!(dir = %dir.display(), "static directory missing, not serving frontend");
        }
        None => {}
    }

    router
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
