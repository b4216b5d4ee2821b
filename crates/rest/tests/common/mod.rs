//! Common test utilities for REST API testing.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use movies_persistence::backends::memory::{MemoryCache, MemoryIndex};
use movies_rest::{AppState, HealthProbe, ServerConfig, create_app_with_config};
use movies_service::CatalogServices;
use serde_json::json;

/// A probe with a fixed outcome.
pub struct StaticProbe {
    pub name: &'static str,
    pub failure: Option<String>,
}

#[async_trait]
impl HealthProbe for StaticProbe {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn check(&self) -> Result<(), String> {
        match &self.failure {
            Some(message) => Err(message.clone()),
            None => Ok(()),
        }
    }
}

/// Backends behind a test server, kept so tests can seed or break them.
pub struct TestCatalog {
    pub server: TestServer,
    pub films: Arc<MemoryIndex>,
    pub genres: Arc<MemoryIndex>,
    pub persons: Arc<MemoryIndex>,
    pub cache: Arc<MemoryCache>,
}

pub fn seed_films(index: &MemoryIndex) {
    index.insert_many([
        json!({
            "id": "f-matrix",
            "title": "The Matrix",
            "description": "A hacker discovers reality is simulated",
            "imdb_rating": 8.7,
            "genres": ["Action", "Sci-Fi"],
            "actors": [{"id": "p-keanu", "name": "Keanu Reeves"}],
            "actors_names": ["Keanu Reeves"],
            "writers": [{"id": "p-lana", "name": "Lana Wachowski"}],
            "writers_names": ["Lana Wachowski"],
            "directors": [{"id": "p-lana", "name": "Lana Wachowski"}],
            "directors_names": ["Lana Wachowski"]
        }),
        json!({
            "id": "f-reloaded",
            "title": "Matrix Reloaded",
            "imdb_rating": 7.2,
            "genres": ["Action", "Sci-Fi", "Western"],
            "actors": [{"id": "p-keanu", "name": "Keanu Reeves"}],
            "actors_names": ["Keanu Reeves"],
            "writers": [{"id": "p-lana", "name": "Lana Wachowski"}],
            "writers_names": ["Lana Wachowski"]
        }),
        json!({
            "id": "f-inception",
            "title": "Inception",
            "description": "A thief enters a maze of shared dreams",
            "imdb_rating": 8.8,
            "genres": ["Action", "Drama"]
        }),
        json!({
            "id": "f-whiplash",
            "title": "Whiplash",
            "description": "A drummer and his mentor",
            "imdb_rating": 8.5,
            "genres": ["Drama"]
        }),
    ]);
}

pub fn seed_genres(index: &MemoryIndex) {
    index.insert_many([
        json!({"id": "g-action", "name": "Action", "description": "Fights and chases"}),
        json!({"id": "g-drama", "name": "Drama", "description": null}),
        json!({"id": "g-scifi", "name": "Sci-Fi", "description": "Science fiction"}),
    ]);
}

pub fn seed_persons(index: &MemoryIndex) {
    index.insert_many([
        json!({"id": "p-keanu", "full_name": "Keanu Reeves"}),
        json!({"id": "p-lana", "full_name": "Lana Wachowski"}),
    ]);
}

/// Creates a test server over seeded in-memory backends.
pub fn create_test_catalog(probes: Vec<Arc<dyn HealthProbe>>) -> TestCatalog {
    let films = Arc::new(MemoryIndex::new("movies"));
    let genres = Arc::new(MemoryIndex::new("genres"));
    let persons = Arc::new(MemoryIndex::new("persons"));
    let cache = Arc::new(MemoryCache::new());
    seed_films(&films);
    seed_genres(&genres);
    seed_persons(&persons);

    let services = CatalogServices::new(
        films.clone(),
        genres.clone(),
        persons.clone(),
        cache.clone(),
    );
    let config = ServerConfig::for_testing();
    let state = AppState::new(services, config.clone()).with_probes(probes);
    let app = create_app_with_config(state, &config);
    let server = TestServer::new(app).expect("Failed to create test server");

    TestCatalog {
        server,
        films,
        genres,
        persons,
        cache,
    }
}

pub fn create_test_server() -> TestCatalog {
    create_test_catalog(Vec::new())
}
