//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use movies_core::types::DbId;
use validator::Validate;

use crate::contracts::{CreateMovieRequest, MovieResponse, MoviesResponse, UpdateMovieRequest};
use crate::error::{AppError, AppResult};
use crate::extract::Path;
use crate::state::AppState;

/// POST /movies
///
/// Responds 201 with a `Location` header pointing at the new movie.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovieRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let movie = input.into_movie();
    if !state.movies.create(&movie).await? {
        return Err(AppError::InternalError(format!(
            "Movie {} was not persisted",
            movie.id
        )));
    }

    let location = format!("/movies/{}", movie.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(MovieResponse::from(movie)),
    ))
}

/// GET /movies/{id_or_slug}
///
/// A parameter that parses as a UUID is looked up by id, anything else by slug.
pub async fn get(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> AppResult<Json<MovieResponse>> {
    let movie = match id_or_slug.parse::<DbId>() {
        Ok(id) => state.movies.get_by_id(id).await?,
        Err(_) => state.movies.get_by_slug(&id_or_slug).await?,
    };

    let movie = movie.ok_or_else(|| AppError::movie_not_found(&id_or_slug))?;
    Ok(Json(MovieResponse::from(movie)))
}

/// GET /movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<MoviesResponse>> {
    let movies = state.movies.get_all().await?;
    Ok(Json(MoviesResponse::from(movies)))
}

/// PUT /movies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovieRequest>,
) -> AppResult<Json<MovieResponse>> {
    input.validate()?;

    let movie = state
        .movies
        .update(input.into_movie(id))
        .await?
        .ok_or_else(|| AppError::movie_not_found(id))?;
    Ok(Json(MovieResponse::from(movie)))
}

/// DELETE /movies/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if state.movies.delete_by_id(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::movie_not_found(id))
    }
}
