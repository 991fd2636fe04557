pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod slug;
pub mod state;
pub mod upload;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::middleware::envelope::envelope_errors;
use crate::state::{AppState, SharedState};
use crate::upload::{ImageStore, LocalImageStore};

/// Build the app with images stored on local disk under `config.upload_dir`.
pub fn build_app(pool: PgPool, config: Config) -> Router {
    let images = Arc::new(LocalImageStore::new(config.upload_dir.clone(), &config.base_url));
    build_app_with_images(pool, config, images)
}

pub fn build_app_with_images(pool: PgPool, config: Config, images: Arc<dyn ImageStore>) -> Router {
    let upload_dir = config.upload_dir.clone();
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        images,
    });

    Router::new()
        .merge(routes::api_routes())
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .route("/health", axum::routing::get(health))
        .layer(DefaultBodyLimit::disable())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(axum::middleware::from_fn(envelope_errors))
                .layer(RequestBodyLimitLayer::new(max_body_size)),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
