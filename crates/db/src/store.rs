//! PostgreSQL-backed [`RatingStore`].

use async_trait::async_trait;
use ratings_core::store::{RatingStore, StoreError};
use ratings_core::types::{MovieId, RatingSummary};

use crate::repositories::RatingRepo;
use crate::DbPool;

/// Serves rating aggregates straight from the `ratings` table.
#[derive(Clone)]
pub struct PgRatingStore {
    pool: DbPool,
}

impl PgRatingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Pool exhaustion and connection failures mean the database is out of
/// reach; everything else is a failed query.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        other => StoreError::query(other),
    }
}

#[async_trait]
impl RatingStore for PgRatingStore {
    async fn average_for_movie(
        &self,
        movie_id: MovieId,
    ) -> Result<Option<RatingSummary>, StoreError> {
        let row = RatingRepo::average_for_movie(&self.pool, movie_id.get())
            .await
            .map_err(map_sqlx_error)?;
        Ok(row.and_then(|r| r.into_summary()))
    }

    async fn averages_for_movies(
        &self,
        movie_ids: &[MovieId],
    ) -> Result<Vec<RatingSummary>, StoreError> {
        let raw: Vec<i32> = movie_ids.iter().map(|id| id.get()).collect();
        let rows = RatingRepo::averages_for_movies(&self.pool, &raw)
            .await
            .map_err(map_sqlx_error)?;
        tracing::debug!(requested = raw.len(), rows = rows.len(), "Fetched rating aggregates");
        Ok(rows.into_iter().filter_map(|r| r.into_summary()).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(map_sqlx_error)
    }
}
