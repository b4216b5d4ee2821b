//! Application state for the movies REST API.
//!
//! Handlers receive [`AppState`] through axum's `State` extractor. It holds
//! the catalog services, the configuration and the probes behind `/health`.

use std::sync::Arc;

use movies_service::CatalogServices;

use crate::config::ServerConfig;
use crate::health::HealthProbe;

/// Shared application state for the REST API.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use movies_persistence::backends::memory::{MemoryCache, MemoryIndex};
/// use movies_rest::{AppState, ServerConfig};
/// use movies_service::CatalogServices;
///
/// let services = CatalogServices::new(
///     Arc::new(MemoryIndex::new("movies")),
///     Arc::new(MemoryIndex::new("genres")),
///     Arc::new(MemoryIndex::new("persons")),
///     Arc::new(MemoryCache::new()),
/// );
/// let state = AppState::new(services, ServerConfig::for_testing());
/// assert!(state.probes().is_empty());
/// ```
#[derive(Clone)]
pub struct AppState {
    services: CatalogServices,
    config: Arc<ServerConfig>,
    probes: Arc<Vec<Arc<dyn HealthProbe>>>,
}

impl AppState {
    /// Creates a new state with no health probes.
    pub fn new(services: CatalogServices, config: ServerConfig) -> Self {
        Self {
            services,
            config: Arc::new(config),
            probes: Arc::new(Vec::new()),
        }
    }

    /// Sets the probes checked by `/health`.
    pub fn with_probes(mut self, probes: Vec<Arc<dyn HealthProbe>>) -> Self {
        self.probes = Arc::new(probes);
        self
    }

    /// Returns the catalog services.
    pub fn services(&self) -> &CatalogServices {
        &self.services
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the health probes.
    pub fn probes(&self) -> &[Arc<dyn HealthProbe>] {
        &self.probes
    }
}
