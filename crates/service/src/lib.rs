//! Movies Catalog Services
//!
//! Typed, cache-aside read services over the catalog's search indices.
//!
//! - [`EntityService`] - generic read-through service for one entity kind
//! - [`FilmService`] - film search, genre filtering and per-person listing
//! - [`GenreService`] - genre lookup and listing
//! - [`PersonService`] - person lookup and search with derived film roles
//! - [`roles`] - name-based person/film role resolution
//!
//! Services hold their backends as `Arc<dyn SearchProvider>` and
//! `Arc<dyn CacheStore>`, constructed once by the process entry point and
//! injected here.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use movies_persistence::backends::memory::{MemoryCache, MemoryIndex};
//! use movies_service::CatalogServices;
//!
//! let services = CatalogServices::new(
//!     Arc::new(MemoryIndex::new("movies")),
//!     Arc::new(MemoryIndex::new("genres")),
//!     Arc::new(MemoryIndex::new("persons")),
//!     Arc::new(MemoryCache::new()),
//! );
//! # let _ = services;
//! ```

use std::sync::Arc;
use std::time::Duration;

use movies_persistence::core::{CacheStore, SearchProvider};

pub mod entity;
pub mod film;
pub mod genre;
pub mod models;
pub mod person;
pub mod roles;

pub use entity::{CACHE_TTL, EntityService};
pub use film::FilmService;
pub use genre::GenreService;
pub use models::{Entity, Film, FilmPerson, Genre, Person, PersonFilm, Role};
pub use person::PersonService;

/// The three catalog services, sharing one cache.
#[derive(Clone)]
pub struct CatalogServices {
    pub films: FilmService,
    pub genres: GenreService,
    pub persons: PersonService,
}

impl CatalogServices {
    /// Wires the services to one index per entity kind and a shared cache.
    pub fn new(
        films: Arc<dyn SearchProvider>,
        genres: Arc<dyn SearchProvider>,
        persons: Arc<dyn SearchProvider>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        let film_service = FilmService::new(films, Arc::clone(&cache));
        Self {
            genres: GenreService::new(genres, Arc::clone(&cache)),
            persons: PersonService::new(persons, cache, film_service.clone()),
            films: film_service,
        }
    }

    /// Applies `ttl` to every service's cache writes.
    pub fn with_cache_ttl(self, ttl: Duration) -> Self {
        Self {
            films: self.films.with_cache_ttl(ttl),
            genres: self.genres.with_cache_ttl(ttl),
            persons: self.persons.with_cache_ttl(ttl),
        }
    }
}
