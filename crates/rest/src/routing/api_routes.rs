//! Catalog route configuration.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Creates all catalog routes.
///
/// # Routes
///
/// - `GET /health` - Health check
/// - `GET /api/v1/films/` - Film listing (`genre` filter)
/// - `GET /api/v1/films/search/` - Film search
/// - `GET /api/v1/films/{film_id}` - Film detail
/// - `GET /api/v1/genres/` - Genre listing
/// - `GET /api/v1/genres/{genre_id}` - Genre detail
/// - `GET /api/v1/persons/search` - Person search
/// - `GET /api/v1/persons/{person_id}` - Person detail
/// - `GET /api/v1/persons/{person_id}/films` - Person filmography
///
/// Collection paths answer with and without the trailing slash.
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        // Films
        .route("/api/v1/films", get(handlers::film_list_handler))
        .route("/api/v1/films/", get(handlers::film_list_handler))
        .route("/api/v1/films/search", get(handlers::film_search_handler))
        .route("/api/v1/films/search/", get(handlers::film_search_handler))
        .route("/api/v1/films/{film_id}", get(handlers::film_details_handler))
        // Genres
        .route("/api/v1/genres", get(handlers::genre_list_handler))
        .route("/api/v1/genres/", get(handlers::genre_list_handler))
        .route("/api/v1/genres/{genre_id}", get(handlers::genre_details_handler))
        // Persons
        .route("/api/v1/persons/search", get(handlers::person_search_handler))
        .route("/api/v1/persons/search/", get(handlers::person_search_handler))
        .route("/api/v1/persons/{person_id}", get(handlers::person_details_handler))
        .route(
            "/api/v1/persons/{person_id}/films",
            get(handlers::person_films_handler),
        )
        .with_state(state)
}
