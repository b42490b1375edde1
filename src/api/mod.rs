use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;

pub mod error;
pub mod handlers;
pub mod models;

/// Upper bound on request bodies; search arrays of a few million
/// elements still fit.
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

pub fn create_router(config: &Config) -> anyhow::Result<Router> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("invalid CORS origin: {origin}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let router = Router::new()
        // API routes
        .route(
            "/api/search/iterative",
            post(handlers::search_iterative_handler),
        )
        .route(
            "/api/search/recursive",
            post(handlers::search_recursive_handler),
        )
        .route("/api/performance", post(handlers::performance_handler))
        .route("/api/generate-array", post(handlers::generate_array_handler))
        .route("/health", get(handlers::health_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
