//! Genre handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::error::{RestError, RestResult};
use crate::extractors::Pagination;
use crate::responses::GenreOut;
use crate::state::AppState;

/// `GET /api/v1/genres/{genre_id}`
pub async fn genre_details_handler(
    State(state): State<AppState>,
    Path(genre_id): Path<String>,
) -> RestResult<Json<GenreOut>> {
    let genre = state
        .services()
        .genres
        .get_by_id(&genre_id)
        .await?
        .ok_or_else(|| RestError::not_found("genre", genre_id))?;
    Ok(Json(genre.into()))
}

/// `GET /api/v1/genres/?page_number=&page_size=&sort=`
pub async fn genre_list_handler(
    State(state): State<AppState>,
    Pagination(params): Pagination,
) -> RestResult<Json<Vec<GenreOut>>> {
    let genres = state.services().genres.get_list(&params).await?;
    Ok(Json(genres.into_iter().map(GenreOut::from).collect()))
}
