//! Handlers for movie rating lookups.
//!
//! Each handler hands the raw input to [`RatingQueryService`] and renders
//! the outcome. Validation lives in the service, so these stay thin.
//!
//! [`RatingQueryService`]: ratings_core::service::RatingQueryService

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use ratings_core::types::RatingSummary;
use ratings_core::validation::decode_movie_ids;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::context::RequestCtx;
use crate::state::AppState;

/// Query parameters for the query-style single lookup.
#[derive(Debug, Deserialize)]
pub struct MovieIdParams {
    #[serde(rename = "movieId", alias = "movie_id")]
    pub movie_id: Option<String>,
}

/// GET /api/v1/ratings/movie/{movie_id}
///
/// Average rating for one movie, ID taken from the path.
pub async fn get_movie_rating(
    RequestCtx(ctx): RequestCtx,
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<RatingSummary>> {
    let Path(movie_id) = path.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let summary = state.ratings.get_rating(&ctx, Some(&movie_id)).await?;

    Ok(Json(summary))
}

/// GET /api/v1/ratings/movie?movieId=
///
/// Same lookup with the ID as a query parameter. Without one the request
/// is rejected with "Movie ID is required".
pub async fn get_movie_rating_by_query(
    RequestCtx(ctx): RequestCtx,
    State(state): State<AppState>,
    query: Result<Query<MovieIdParams>, QueryRejection>,
) -> AppResult<Json<RatingSummary>> {
    let Query(params) =
        query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let summary = state
        .ratings
        .get_rating(&ctx, params.movie_id.as_deref())
        .await?;

    Ok(Json(summary))
}

/// POST /api/v1/ratings/movies
///
/// Average ratings for a JSON array of movie IDs. The body is decoded by
/// hand so malformed elements get the domain message rather than a generic
/// JSON rejection.
pub async fn get_movie_ratings(
    RequestCtx(ctx): RequestCtx,
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<Vec<RatingSummary>>> {
    let movie_ids = decode_movie_ids(&body)?;

    let ratings = state.ratings.get_batch_ratings(&ctx, movie_ids).await?;

    Ok(Json(ratings))
}
