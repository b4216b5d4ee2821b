//! Film service.

use std::sync::Arc;
use std::time::Duration;

use movies_persistence::core::{CacheStore, SearchProvider};
use movies_persistence::error::StorageResult;
use movies_persistence::types::{NestedQuery, PageParams, SearchField};

use crate::entity::EntityService;
use crate::models::{Film, Genre, Role};

/// Field holding a film's genre names.
pub const GENRE_FIELD: &str = "genres";

/// Boost applied to title matches in film search.
pub const TITLE_BOOST: f32 = 3.0;

/// Fields searched by [`FilmService::search`].
pub fn search_fields() -> Vec<SearchField> {
    vec![
        SearchField::boosted("title", TITLE_BOOST),
        SearchField::new("description"),
        SearchField::new("actors_names"),
        SearchField::new("writers_names"),
        SearchField::new("directors_names"),
    ]
}

/// Reads films.
#[derive(Clone)]
pub struct FilmService {
    entities: EntityService<Film>,
}

impl FilmService {
    pub fn new(search: Arc<dyn SearchProvider>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            entities: EntityService::new(search, cache),
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.entities = self.entities.with_cache_ttl(ttl);
        self
    }

    /// The generic service underneath.
    pub fn entities(&self) -> &EntityService<Film> {
        &self.entities
    }

    pub async fn get_by_id(&self, id: &str) -> StorageResult<Option<Film>> {
        self.entities.get_by_id(id).await
    }

    /// Full-text search over title, description and the credited names.
    pub async fn search(&self, text: &str, params: &PageParams) -> StorageResult<Vec<Film>> {
        self.entities
            .text_search(Some(text), &search_fields(), params)
            .await
    }

    /// Lists films, restricted to `genre` when given.
    ///
    /// The restriction is a text match of the genre *name* against the
    /// film's genre list, so two genres sharing a name are indistinguishable.
    pub async fn list(&self, params: &PageParams, genre: Option<&Genre>) -> StorageResult<Vec<Film>> {
        let query = genre.map(|g| g.name.as_str());
        self.entities
            .text_search(query, &[SearchField::new(GENRE_FIELD)], params)
            .await
    }

    /// Lists films where `person_id` is credited under any role.
    pub async fn list_by_person(
        &self,
        person_id: &str,
        params: &PageParams,
    ) -> StorageResult<Vec<Film>> {
        self.entities.list(params, &person_filters(person_id)).await
    }
}

/// One nested `id` filter per role; a film matches if any holds.
fn person_filters(person_id: &str) -> Vec<NestedQuery> {
    Role::ALL
        .iter()
        .map(|role| NestedQuery::term(role.nested_path(), "id", person_id))
        .collect()
}
