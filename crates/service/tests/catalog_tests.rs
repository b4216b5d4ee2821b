//! End-to-end service behaviour over the in-memory backends.

mod common;

use std::collections::BTreeSet;
use std::time::Duration;

use movies_persistence::core::{CacheStore, cache_key};
use movies_persistence::types::PageParams;
use movies_service::{CACHE_TTL, Entity, Film, Genre, Role};

use common::{catalog, prolific_actor_services};

// ============================================================================
// Cache-aside reads
// ============================================================================

#[tokio::test]
async fn test_second_read_is_served_from_cache() {
    let cat = catalog();

    let first = cat.services.films.get_by_id("f-matrix").await.unwrap().unwrap();
    let second = cat.services.films.get_by_id("f-matrix").await.unwrap().unwrap();

    assert_eq!(first, second);
    assert_eq!(cat.films.gets(), 1);
}

#[tokio::test]
async fn test_cached_payload_round_trips() {
    let cat = catalog();
    let film = cat.services.films.get_by_id("f-matrix").await.unwrap().unwrap();

    let bytes = cat
        .cache
        .get(&cache_key(Film::KIND, "f-matrix"))
        .await
        .unwrap()
        .unwrap();
    let cached: Film = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(cached, film);
}

#[tokio::test]
async fn test_missing_ids_are_absent_everywhere() {
    let cat = catalog();
    assert!(cat.services.films.get_by_id("nope").await.unwrap().is_none());
    assert!(cat.services.genres.get_by_id("nope").await.unwrap().is_none());
    assert!(cat.services.persons.get_by_id("nope").await.unwrap().is_none());

    // No negative caching: asking again goes back to the engine.
    assert!(cat.services.films.get_by_id("nope").await.unwrap().is_none());
    assert_eq!(cat.films.gets(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_entries_expire_after_ttl() {
    let cat = catalog();
    cat.services.genres.get_by_id("g-drama").await.unwrap();

    tokio::time::advance(CACHE_TTL - Duration::from_secs(1)).await;
    cat.services.genres.get_by_id("g-drama").await.unwrap();
    assert_eq!(cat.genres.gets(), 1);

    tokio::time::advance(Duration::from_secs(2)).await;
    cat.services.genres.get_by_id("g-drama").await.unwrap();
    assert_eq!(cat.genres.gets(), 2);
}

#[tokio::test]
async fn test_custom_ttl() {
    let cat = catalog();
    let services = cat.services.clone().with_cache_ttl(Duration::from_secs(30));
    assert_eq!(services.films.entities().cache_ttl(), Duration::from_secs(30));
    assert_eq!(services.persons.entities().cache_ttl(), Duration::from_secs(30));
}

#[tokio::test]
async fn test_cache_outage_is_not_a_miss() {
    let cat = catalog();
    cat.cache.set_available(false);

    let err = cat.services.genres.get_by_id("g-drama").await.unwrap_err();
    assert!(err.is_unavailable());
    assert_eq!(cat.genres.gets(), 0);
}

// ============================================================================
// Films
// ============================================================================

#[tokio::test]
async fn test_drama_listing() {
    let cat = catalog();
    let drama = Genre {
        id: "g-drama".to_string(),
        name: "Drama".to_string(),
        description: None,
    };

    let params = PageParams::new(1, 2).unwrap();
    let films = cat.services.films.list(&params, Some(&drama)).await.unwrap();

    let ids: Vec<_> = films.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["f-inception", "f-whiplash"]);
    assert!(films.iter().all(|f| f.genres.iter().any(|g| g == "Drama")));
}

#[tokio::test]
async fn test_title_boost_ranking() {
    let cat = catalog();
    let films = cat
        .services
        .films
        .search("Matrix", &PageParams::default())
        .await
        .unwrap();

    let ids: Vec<_> = films.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["f-matrix", "f-reloaded", "f-inception"]);
}

#[tokio::test]
async fn test_writer_only_film_appears_once() {
    let cat = catalog();
    let films = cat
        .services
        .films
        .list_by_person("p-lana", &PageParams::default())
        .await
        .unwrap();

    let ids: Vec<_> = films.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["f-matrix", "f-reloaded"]);
}

#[tokio::test]
async fn test_listing_is_not_cached() {
    let cat = catalog();
    cat.services.films.list(&PageParams::default(), None).await.unwrap();
    cat.services.films.list(&PageParams::default(), None).await.unwrap();
    assert_eq!(cat.films.searches(), 2);
    assert!(cat.cache.is_empty());
}

// ============================================================================
// Genres
// ============================================================================

#[tokio::test]
async fn test_resolve_film_genres_by_name() {
    let cat = catalog();
    let film = cat.services.films.get_by_id("f-matrix").await.unwrap().unwrap();

    let mut resolved = Vec::new();
    for name in &film.genres {
        if let Some(genre) = cat.services.genres.get_by_name(name).await.unwrap() {
            resolved.push(genre.id);
        }
    }
    assert_eq!(resolved, vec!["g-action", "g-scifi"]);
}

// ============================================================================
// Persons
// ============================================================================

#[tokio::test]
async fn test_person_roles() {
    let cat = catalog();
    let person = cat.services.persons.get_by_id("p-lana").await.unwrap().unwrap();

    assert_eq!(person.full_name, "Lana Wachowski");
    assert_eq!(person.films.len(), 2);
    assert_eq!(
        person.films[0].roles,
        BTreeSet::from([Role::Director, Role::Writer])
    );
    assert_eq!(person.films[1].roles, BTreeSet::from([Role::Writer]));
}

#[tokio::test]
async fn test_cached_person_skips_film_index() {
    let cat = catalog();
    cat.services.persons.get_by_id("p-keanu").await.unwrap();
    let searches = cat.films.searches();

    let person = cat.services.persons.get_by_id("p-keanu").await.unwrap().unwrap();
    assert_eq!(cat.films.searches(), searches);
    assert_eq!(cat.persons.gets(), 1);
    assert_eq!(person.films.len(), 2);
}

#[tokio::test]
async fn test_person_search_with_typo() {
    let cat = catalog();
    let persons = cat
        .services
        .persons
        .search("Keanu Reves", &PageParams::default())
        .await
        .unwrap();

    assert_eq!(persons[0].id, "p-keanu");
    assert!(persons[0].films.iter().all(|f| f.roles.contains(&Role::Actor)));
}

#[tokio::test]
async fn test_person_films_span_more_than_one_page() {
    let services = prolific_actor_services(25);
    let page = PageParams::default();
    assert!(page.page_size() < 25);

    let person = services.persons.get_by_id("p-ann").await.unwrap().unwrap();
    assert_eq!(person.films.len(), 25);
    assert!(
        person
            .films
            .iter()
            .all(|f| f.roles == BTreeSet::from([Role::Actor]))
    );

    let found = services.persons.search("Ann", &page).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "p-ann");
    assert_eq!(found[0].films.len(), 25);
}
