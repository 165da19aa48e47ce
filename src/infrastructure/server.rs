// Server module - Provides reusable HTTP server functionality

use axum::Router;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::infrastructure::{AppState, config::Config, db};
use crate::modules::integrations::GoogleBooksClient;

/// Build the application router with CORS and request tracing
pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    let allow_origin = if cors_allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let mut origins = Vec::new();
        for origin in cors_allowed_origins {
            match origin.parse::<HeaderValue>() {
                Ok(v) => origins.push(v),
                Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
            }
        }
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    api::api_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Connect to the database and the catalog, then serve until the listener fails
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let db = db::init_db(&config.database_url).await?;

    let catalog = GoogleBooksClient::new(
        config.catalog_base_url.clone(),
        config.catalog_api_key.clone(),
        config.catalog_timeout,
    )?;
    tracing::info!("Catalog API at {}", config.catalog_base_url);

    let state = AppState::new(db, Arc::new(catalog));
    let app = build_router(state, &config.cors_allowed_origins);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Reading list server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
