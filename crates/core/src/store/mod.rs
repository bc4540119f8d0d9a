//! The rating store seam.
//!
//! Defines [`RatingStore`], the aggregation source the query service reads
//! from. `ratings_db` provides the PostgreSQL implementation; [`memory`]
//! provides one over an in-process list of ratings.

pub mod memory;

use async_trait::async_trait;

use crate::types::{MovieId, RatingSummary};

/// Failure raised by a rating store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing service could not be reached.
    #[error("Rating store unavailable: {0}")]
    Unavailable(String),

    /// The aggregation query itself failed.
    #[error("Rating query failed: {source}")]
    Query {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StoreError {
    /// Wrap a backend error as a query failure.
    pub fn query(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Query {
            source: Box::new(source),
        }
    }
}

/// Computes per-movie rating aggregates on demand.
///
/// Implementations return a summary only for movies with at least one
/// rating, with the mean rounded to one decimal place. Movies without
/// ratings are left out; there is no zero placeholder.
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Aggregate for one movie, or `None` if it has no ratings.
    async fn average_for_movie(&self, movie_id: MovieId)
        -> Result<Option<RatingSummary>, StoreError>;

    /// Aggregates for a set of movies. Order is unspecified and unrated
    /// movies are absent.
    async fn averages_for_movies(
        &self,
        movie_ids: &[MovieId],
    ) -> Result<Vec<RatingSummary>, StoreError>;

    /// Cheap reachability probe for health reporting.
    async fn health_check(&self) -> Result<(), StoreError>;
}
