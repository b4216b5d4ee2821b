//! # movies-rest - HTTP API for the movies catalog
//!
//! A thin axum route layer over [`movies_service`]: it parses path and query
//! parameters, calls the catalog services, maps absent results to `404` and
//! serializes entities to the response schemas.
//!
//! ## API Endpoints
//!
//! | Endpoint | Description |
//! |----------|-------------|
//! | `GET /api/v1/films/` | Films, paginated, optional `genre` id filter |
//! | `GET /api/v1/films/search/` | Full-text film search (`query`) |
//! | `GET /api/v1/films/{id}` | Film detail |
//! | `GET /api/v1/genres/` | Genres, paginated |
//! | `GET /api/v1/genres/{id}` | Genre detail |
//! | `GET /api/v1/persons/search` | Full-text person search (`query`) |
//! | `GET /api/v1/persons/{id}` | Person detail with roles per film |
//! | `GET /api/v1/persons/{id}/films` | Films of a person, paginated |
//! | `GET /health` | Search engine and cache checks |
//!
//! Every listing accepts `page_number` (default 1), `page_size` (default 10)
//! and repeated `sort` values such as `-imdb_rating`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use movies_persistence::backends::memory::{MemoryCache, MemoryIndex};
//! use movies_rest::{AppState, ServerConfig, create_app_with_config};
//! use movies_service::CatalogServices;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let services = CatalogServices::new(
//!         Arc::new(MemoryIndex::new("movies")),
//!         Arc::new(MemoryIndex::new("genres")),
//!         Arc::new(MemoryIndex::new("persons")),
//!         Arc::new(MemoryCache::new()),
//!     );
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(AppState::new(services, config.clone()), &config);
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use axum::Router;
use movies_service::CatalogServices;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod health;
pub mod responses;
pub mod routing;
pub mod state;

pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use health::HealthProbe;
pub use state::AppState;

/// Creates the application with default configuration and no health probes.
pub fn create_app(services: CatalogServices) -> Router {
    let config = ServerConfig::default();
    create_app_with_config(AppState::new(services, config.clone()), &config)
}

/// Creates the application from prepared state.
///
/// Adds request tracing, the request timeout and, when enabled, CORS.
pub fn create_app_with_config(state: AppState, config: &ServerConfig) -> Router {
    info!(
        probes = state.probes().len(),
        cache_ttl_secs = config.cache_ttl,
        "Creating movies API router"
    );

    let router = routing::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        router.layer(build_cors_layer(config))
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer. The API is read-only, so only `GET` is allowed.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `level` when set.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "movies_rest={level},movies_service={level},movies_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
