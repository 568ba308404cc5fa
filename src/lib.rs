//! Fabrik API: HR, work tracking, and store management over one
//! table-driven CRUD engine.

pub mod config;
pub mod crud;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod openapi;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<config::AppConfig>,
    /// Client for the internal HTTP calls composite reads make.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: config::AppConfig) -> Self {
        Self {
            db: Arc::new(db),
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}

/// Assemble the full application router: module routes, health probes,
/// Swagger UI, and the middleware stack.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.config.allowed_origins());

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .nest("/hr", handlers::hr::routes())
        .nest("/work", handlers::work::routes())
        .nest("/store", handlers::store::routes())
        .merge(openapi::swagger_ui())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Exact-match CORS allow-list. Origins that are not listed verbatim are
/// refused; an empty list refuses every cross-origin caller.
fn cors_layer(origins: Vec<String>) -> CorsLayer {
    let mut values: Vec<HeaderValue> = Vec::with_capacity(origins.len());
    for origin in &origins {
        match HeaderValue::from_str(origin) {
            Ok(value) => values.push(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring unparsable CORS origin");
            }
        }
    }

    if values.is_empty() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(values)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
