//! Repository for aggregate reads over the `ratings` table.

use sqlx::PgPool;

use crate::models::rating::RatingSummaryRow;

/// Aggregate column list. The mean is rounded in `numeric` so the result is
/// exact to one decimal before it is cast back to `float8`.
const SUMMARY_COLUMNS: &str = "movie_id, \
     ROUND(AVG(rating)::numeric, 1)::float8 AS average_rating, \
     COUNT(*) AS rating_count";

/// Provides read-only aggregate queries over ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Rounded mean and count for one movie. `None` if it has no ratings.
    pub async fn average_for_movie(
        pool: &PgPool,
        movie_id: i32,
    ) -> Result<Option<RatingSummaryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM ratings WHERE movie_id = $1 GROUP BY movie_id"
        );
        sqlx::query_as::<_, RatingSummaryRow>(&query)
            .bind(movie_id)
            .fetch_optional(pool)
            .await
    }

    /// Rounded mean and count for each listed movie that has ratings,
    /// ordered by `movie_id`.
    pub async fn averages_for_movies(
        pool: &PgPool,
        movie_ids: &[i32],
    ) -> Result<Vec<RatingSummaryRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM ratings WHERE movie_id = ANY($1) \
             GROUP BY movie_id ORDER BY movie_id ASC"
        );
        sqlx::query_as::<_, RatingSummaryRow>(&query)
            .bind(movie_ids)
            .fetch_all(pool)
            .await
    }
}
