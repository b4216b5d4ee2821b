//! Person handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::{RestError, RestResult};
use crate::extractors::{Pagination, SearchText};
use crate::responses::{PersonFilmOut, PersonOut};
use crate::state::AppState;

/// Person detail with the roles held in each film.
///
/// `GET /api/v1/persons/{person_id}`
pub async fn person_details_handler(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
) -> RestResult<Json<PersonOut>> {
    let person = state
        .services()
        .persons
        .get_by_id(&person_id)
        .await?
        .ok_or_else(|| RestError::not_found("person", person_id))?;
    Ok(Json(person.into()))
}

/// Full-text person search on the full name.
///
/// `GET /api/v1/persons/search?query=&page_number=&page_size=&sort=`
pub async fn person_search_handler(
    State(state): State<AppState>,
    SearchText(query): SearchText,
    Pagination(params): Pagination,
) -> RestResult<Json<Vec<PersonOut>>> {
    let persons = state.services().persons.search(&query, &params).await?;
    Ok(Json(persons.into_iter().map(PersonOut::from).collect()))
}

/// One page of the films a person is credited in, under any role.
///
/// `GET /api/v1/persons/{person_id}/films?page_number=&page_size=&sort=`
///
/// An unknown person yields an empty list.
pub async fn person_films_handler(
    State(state): State<AppState>,
    Path(person_id): Path<String>,
    Pagination(params): Pagination,
) -> RestResult<Json<Vec<PersonFilmOut>>> {
    let films = state
        .services()
        .persons
        .get_person_films(&person_id, &params)
        .await?;
    Ok(Json(films.into_iter().map(PersonFilmOut::from).collect()))
}
