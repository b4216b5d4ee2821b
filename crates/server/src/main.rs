//! Movies catalog API server.
//!
//! Owns the process-wide search engine and cache handles: they are built
//! here at startup, injected into the catalog services and dropped on
//! shutdown.

use std::sync::Arc;

use clap::Parser;
use movies_persistence::backends::elasticsearch::ElasticsearchBackend;
use movies_persistence::backends::redis::RedisCache;
use movies_rest::{AppState, HealthProbe, ServerConfig, create_app_with_config, init_logging};
use movies_service::CatalogServices;
use tracing::{info, warn};

/// Creates the Elasticsearch backend and checks the cluster once.
///
/// An unhealthy cluster is logged, not fatal; requests fail until it
/// recovers.
async fn create_search_backend(config: &ServerConfig) -> anyhow::Result<ElasticsearchBackend> {
    let es_config = config.elasticsearch_config();
    info!(
        nodes = ?es_config.nodes,
        films = %config.films_index,
        genres = %config.genres_index,
        persons = %config.persons_index,
        "Initializing Elasticsearch backend"
    );

    let backend = ElasticsearchBackend::new(es_config)?;
    if let Err(e) = backend.health_check().await {
        warn!(error = %e, "Elasticsearch is not healthy yet");
    }
    Ok(backend)
}

/// Connects the Redis cache. The cache is required to serve lookups, so a
/// failed connection aborts startup.
async fn create_cache(config: &ServerConfig) -> anyhow::Result<RedisCache> {
    let cache = RedisCache::connect(config.redis_config()).await?;
    cache.ping().await?;
    Ok(cache)
}

/// Starts the Axum HTTP server and waits for Ctrl-C.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        cache_ttl_secs = config.cache_ttl,
        "Starting movies API server"
    );

    let search = create_search_backend(&config).await?;
    let cache = Arc::new(create_cache(&config).await?);

    let services = CatalogServices::new(
        Arc::new(search.index(config.films_index.as_str())),
        Arc::new(search.index(config.genres_index.as_str())),
        Arc::new(search.index(config.persons_index.as_str())),
        cache.clone(),
    )
    .with_cache_ttl(config.cache_ttl());

    let probes: Vec<Arc<dyn HealthProbe>> = vec![
        Arc::new(search) as Arc<dyn HealthProbe>,
        cache as Arc<dyn HealthProbe>,
    ];
    let state = AppState::new(services, config.clone()).with_probes(probes);
    let app = create_app_with_config(state, &config);

    serve(app, &config).await?;

    info!("Server stopped");
    Ok(())
}
