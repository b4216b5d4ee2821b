//! Dependency probes reported by `/health`.

use async_trait::async_trait;

/// A dependency whose reachability is reported by the health endpoint.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Name under which the probe appears in the health report.
    fn name(&self) -> &'static str;

    /// Returns `Err` with a description when the dependency is unhealthy.
    async fn check(&self) -> Result<(), String>;
}

#[cfg(feature = "elasticsearch")]
#[async_trait]
impl HealthProbe for movies_persistence::backends::elasticsearch::ElasticsearchBackend {
    fn name(&self) -> &'static str {
        "search_engine"
    }

    async fn check(&self) -> Result<(), String> {
        self.health_check().await.map_err(|e| e.to_string())
    }
}

#[cfg(feature = "redis")]
#[async_trait]
impl HealthProbe for movies_persistence::backends::redis::RedisCache {
    fn name(&self) -> &'static str {
        "cache"
    }

    async fn check(&self) -> Result<(), String> {
        self.ping().await.map_err(|e| e.to_string())
    }
}
