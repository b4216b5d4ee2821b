//! Person service.
//!
//! A person document carries no filmography; it is rebuilt from the film
//! index on every engine read and derived with [`derive_roles`].

use std::sync::Arc;
use std::time::Duration;

use movies_persistence::core::{CacheStore, SearchProvider};
use movies_persistence::error::StorageResult;
use movies_persistence::types::{PageParams, SearchField};

use crate::entity::{EntityService, hydrate};
use crate::film::FilmService;
use crate::models::{Entity, Film, Person};
use crate::roles::derive_roles;

/// Field searched by [`PersonService::search`].
pub const NAME_FIELD: &str = "full_name";

/// Reads persons and resolves their film roles.
#[derive(Clone)]
pub struct PersonService {
    entities: EntityService<Person>,
    films: FilmService,
}

impl PersonService {
    pub fn new(
        search: Arc<dyn SearchProvider>,
        cache: Arc<dyn CacheStore>,
        films: FilmService,
    ) -> Self {
        Self {
            entities: EntityService::new(search, cache),
            films,
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.entities = self.entities.with_cache_ttl(ttl);
        self
    }

    pub fn entities(&self) -> &EntityService<Person> {
        &self.entities
    }

    /// Cache-aside read of a person with their film roles.
    ///
    /// On a cache miss the filmography is fetched with
    /// [`PageParams::fetch_all`], so films past that ceiling are silently
    /// left out. The enriched person is what gets cached.
    pub async fn get_by_id(&self, id: &str) -> StorageResult<Option<Person>> {
        if let Some(cached) = self.entities.get_from_cache(id).await? {
            return Ok(Some(cached));
        }

        let Some(doc) = self.entities.search_provider().get_by_id(id).await? else {
            tracing::debug!(entity_kind = Person::KIND, id, "Not found in engine");
            return Ok(None);
        };
        let Some(mut person) = hydrate::<Person>(&doc) else {
            return Ok(None);
        };

        let films = self.all_films_of(&person.id).await?;
        person.films = derive_roles(&person, &films);

        self.entities.put_to_cache(&person).await?;
        Ok(Some(person))
    }

    /// Full-text search on the person's name, each hit enriched with roles.
    ///
    /// Results are not cached.
    pub async fn search(&self, query: &str, params: &PageParams) -> StorageResult<Vec<Person>> {
        let mut persons = self
            .entities
            .text_search(Some(query), &[SearchField::new(NAME_FIELD)], params)
            .await?;

        for person in &mut persons {
            let films = self.all_films_of(&person.id).await?;
            person.films = derive_roles(person, &films);
        }
        Ok(persons)
    }

    /// One page of the films a person is credited in.
    pub async fn get_person_films(
        &self,
        person_id: &str,
        params: &PageParams,
    ) -> StorageResult<Vec<Film>> {
        self.films.list_by_person(person_id, params).await
    }

    async fn all_films_of(&self, person_id: &str) -> StorageResult<Vec<Film>> {
        self.films
            .list_by_person(person_id, &PageParams::fetch_all())
            .await
    }
}
