//! Route definitions for movie rating lookups.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ratings;
use crate::state::AppState;

/// Rating routes mounted at `/ratings`.
///
/// ```text
/// GET    /movie               -> get_movie_rating_by_query
/// GET    /movie/{movie_id}    -> get_movie_rating
/// POST   /movies              -> get_movie_ratings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movie", get(ratings::get_movie_rating_by_query))
        .route("/movie/{movie_id}", get(ratings::get_movie_rating))
        .route("/movies", post(ratings::get_movie_ratings))
}
