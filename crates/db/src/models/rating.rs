//! Aggregated rating rows.

use ratings_core::types::{MovieId, RatingSummary};
use sqlx::FromRow;

/// One aggregated row: `movie_id`, rounded mean, and count.
#[derive(Debug, Clone, FromRow)]
pub struct RatingSummaryRow {
    pub movie_id: i32,
    pub average_rating: f64,
    pub rating_count: i64,
}

impl RatingSummaryRow {
    /// Convert into the domain summary.
    ///
    /// Returns `None` for rows whose `movie_id` is not a valid [`MovieId`];
    /// such rows can only come from data written outside this service.
    pub fn into_summary(self) -> Option<RatingSummary> {
        let movie_id = MovieId::new(self.movie_id).ok()?;
        Some(RatingSummary::new(
            movie_id,
            self.average_rating,
            Some(self.rating_count),
        ))
    }
}
