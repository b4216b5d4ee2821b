//! Shared fixtures for service tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use movies_persistence::backends::memory::{MemoryCache, MemoryIndex};
use movies_persistence::core::SearchProvider;
use movies_persistence::error::StorageResult;
use movies_persistence::types::{Document, NestedQuery, PageParams, SearchField};
use movies_service::CatalogServices;
use serde_json::json;

/// Wraps a [`MemoryIndex`] and counts the calls that reach it.
pub struct CountingIndex {
    pub inner: MemoryIndex,
    pub get_calls: AtomicUsize,
    pub search_calls: AtomicUsize,
}

impl CountingIndex {
    pub fn new(inner: MemoryIndex) -> Self {
        Self {
            inner,
            get_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
        }
    }

    pub fn gets(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn searches(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchProvider for CountingIndex {
    fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    fn index_name(&self) -> &str {
        self.inner.index_name()
    }

    async fn get_by_id(&self, id: &str) -> StorageResult<Option<Document>> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_by_id(id).await
    }

    async fn list(
        &self,
        params: &PageParams,
        nested: &[NestedQuery],
    ) -> StorageResult<Vec<Document>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list(params, nested).await
    }

    async fn text_search(
        &self,
        query: Option<&str>,
        fields: &[SearchField],
        params: &PageParams,
    ) -> StorageResult<Vec<Document>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.text_search(query, fields, params).await
    }
}

pub fn film_docs() -> Vec<Document> {
    vec![
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
            "description": null,
            "imdb_rating": 7.2,
            "genres": ["Action", "Sci-Fi"],
            "actors": [{"id": "p-keanu", "name": "Keanu Reeves"}],
            "actors_names": ["Keanu Reeves"],
            "writers": [{"id": "p-lana", "name": "Lana Wachowski"}],
            "writers_names": ["Lana Wachowski"],
            "directors": [],
            "directors_names": []
        }),
        json!({
            "id": "f-inception",
            "title": "Inception",
            "description": "A thief enters a matrix of shared dreams",
            "imdb_rating": 8.8,
            "genres": ["Action", "Drama"],
            "actors": [],
            "actors_names": [],
            "writers": [],
            "writers_names": [],
            "directors": [],
            "directors_names": []
        }),
        json!({
            "id": "f-whiplash",
            "title": "Whiplash",
            "description": "A drummer and his mentor",
            "imdb_rating": 8.5,
            "genres": ["Drama", "Music"],
            "actors": [],
            "actors_names": [],
            "writers": [],
            "writers_names": [],
            "directors": [],
            "directors_names": []
        }),
    ]
}

pub fn genre_docs() -> Vec<Document> {
    vec![
        json!({"id": "g-action", "name": "Action", "description": null}),
        json!({"id": "g-drama", "name": "Drama", "description": "Serious stories"}),
        json!({"id": "g-scifi", "name": "Sci-Fi", "description": null}),
    ]
}

pub fn person_docs() -> Vec<Document> {
    vec![
        json!({"id": "p-keanu", "full_name": "Keanu Reeves"}),
        json!({"id": "p-lana", "full_name": "Lana Wachowski"}),
    ]
}

pub struct Catalog {
    pub films: Arc<CountingIndex>,
    pub genres: Arc<CountingIndex>,
    pub persons: Arc<CountingIndex>,
    pub cache: Arc<MemoryCache>,
    pub services: CatalogServices,
}

pub fn catalog() -> Catalog {
    let films = Arc::new(CountingIndex::new(index("movies", film_docs())));
    let genres = Arc::new(CountingIndex::new(index("genres", genre_docs())));
    let persons = Arc::new(CountingIndex::new(index("persons", person_docs())));
    let cache = Arc::new(MemoryCache::new());

    let services = CatalogServices::new(
        films.clone(),
        genres.clone(),
        persons.clone(),
        cache.clone(),
    );

    Catalog {
        films,
        genres,
        persons,
        cache,
        services,
    }
}

fn index(name: &str, docs: Vec<Document>) -> MemoryIndex {
    let index = MemoryIndex::new(name);
    index.insert_many(docs);
    index
}

/// Services over an index where one person, `p-ann`, acts in `film_count`
/// films.
pub fn prolific_actor_services(film_count: usize) -> CatalogServices {
    let films: Vec<Document> = (1..=film_count)
        .map(|n| {
            json!({
                "id": format!("f-{n:02}"),
                "title": format!("Feature {n}"),
                "imdb_rating": 5.0,
                "genres": [],
                "actors": [{"id": "p-ann", "name": "Ann Lee"}],
                "actors_names": ["Ann Lee"],
                "writers": [],
                "writers_names": [],
                "directors": [],
                "directors_names": []
            })
        })
        .collect();
    let persons = vec![json!({"id": "p-ann", "full_name": "Ann Lee"})];

    CatalogServices::new(
        Arc::new(index("movies", films)),
        Arc::new(index("genres", genre_docs())),
        Arc::new(index("persons", persons)),
        Arc::new(MemoryCache::new()),
    )
}
