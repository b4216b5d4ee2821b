//! Film handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::{GenreFilter, Pagination, SearchText};
use crate::responses::{FilmOut, FilmShortOut};
use crate::state::AppState;

/// Film detail with resolved genres.
///
/// `GET /api/v1/films/{film_id}`
///
/// Genres are stored on the film by name and resolved through the genre
/// index; names that do not resolve are left out.
///
/// # Response
///
/// - `200 OK` - [`FilmOut`]
/// - `404 Not Found` - no film with this id
pub async fn film_details_handler(
    State(state): State<AppState>,
    Path(film_id): Path<String>,
) -> RestResult<Json<FilmOut>> {
    let services = state.services();
    let film = services
        .films
        .get_by_id(&film_id)
        .await?
        .ok_or_else(|| RestError::not_found("film", &film_id))?;

    let mut genres = Vec::with_capacity(film.genres.len());
    for name in &film.genres {
        match services.genres.get_by_name(name).await? {
            Some(genre) => genres.push(genre),
            None => debug!(film_id = %film_id, genre = %name, "Genre name did not resolve"),
        }
    }

    Ok(Json(FilmOut::new(film, &genres)))
}

/// Paginated film listing, optionally restricted to one genre.
///
/// `GET /api/v1/films/?page_number=&page_size=&sort=&genre=`
///
/// # Response
///
/// - `200 OK` - list of [`FilmShortOut`]
/// - `404 Not Found` - `genre` was given but no such genre exists
/// - `422 Unprocessable Entity` - invalid page parameters
pub async fn film_list_handler(
    State(state): State<AppState>,
    Pagination(params): Pagination,
    GenreFilter(genre_id): GenreFilter,
) -> RestResult<Json<Vec<FilmShortOut>>> {
    let services = state.services();

    let genre = match genre_id {
        Some(id) => Some(
            services
                .genres
                .get_by_id(&id)
                .await?
                .ok_or_else(|| RestError::not_found("genre", id))?,
        ),
        None => None,
    };

    let films = services.films.list(&params, genre.as_ref()).await?;
    Ok(Json(films.into_iter().map(FilmShortOut::from).collect()))
}

/// Full-text film search over the title (boosted), description and credited
/// names.
///
/// `GET /api/v1/films/search/?query=&page_number=&page_size=&sort=`
pub async fn film_search_handler(
    State(state): State<AppState>,
    SearchText(query): SearchText,
    Pagination(params): Pagination,
) -> RestResult<Json<Vec<FilmShortOut>>> {
    let films = state.services().films.search(&query, &params).await?;
    Ok(Json(films.into_iter().map(FilmShortOut::from).collect()))
}
