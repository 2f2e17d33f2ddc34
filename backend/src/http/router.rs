//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive, the front end is served separately
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Dataset and controls
        .route("/dataset", get(handlers::get_dataset))
        .route("/controls", get(handlers::get_controls))
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::put_settings),
        )
        .route("/boundaries", get(handlers::get_boundaries))
        // Selections
        .route("/selections", get(handlers::get_selections))
        .route(
            "/selections/brush",
            put(handlers::put_brush).delete(handlers::delete_brush),
        )
        .route(
            "/selections/{role}",
            put(handlers::put_pick).delete(handlers::delete_pick),
        )
        // Views
        .route("/views/map", get(handlers::get_map_view))
        .route("/views/bar", get(handlers::get_bar_view))
        .route("/views/pie", get(handlers::get_pie_view))
        .route("/views/heatmap", get(handlers::get_heatmap_view))
        .route("/layout", get(handlers::get_layout));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
