pub mod health;
pub mod ratings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ratings/movie                                   single lookup (?movieId=)
/// /ratings/movie/{movie_id}                        single lookup
/// /ratings/movies                                  batch lookup (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/ratings", ratings::router())
}
