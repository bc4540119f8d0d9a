//! In-process [`RatingStore`] over a fixed list of ratings.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{RatingStore, StoreError};
use crate::types::{round_to_tenth, MovieId, Rating, RatingSummary, RawMovieId};

/// Holds raw ratings grouped by movie and aggregates them per lookup.
///
/// The data set is fixed at construction, so lookups need no locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRatingStore {
    by_movie: HashMap<RawMovieId, Vec<f64>>,
}

impl InMemoryRatingStore {
    pub fn new(ratings: impl IntoIterator<Item = Rating>) -> Self {
        let mut by_movie: HashMap<RawMovieId, Vec<f64>> = HashMap::new();
        for rating in ratings {
            by_movie.entry(rating.movie_id).or_default().push(rating.rating);
        }
        Self { by_movie }
    }

    fn summarize(&self, movie_id: MovieId) -> Option<RatingSummary> {
        let values = self.by_movie.get(&movie_id.get())?;
        if values.is_empty() {
            return None;
        }
        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        Some(RatingSummary::new(
            movie_id,
            round_to_tenth(mean),
            Some(count as i64),
        ))
    }
}

#[async_trait]
impl RatingStore for InMemoryRatingStore {
    async fn average_for_movie(
        &self,
        movie_id: MovieId,
    ) -> Result<Option<RatingSummary>, StoreError> {
        Ok(self.summarize(movie_id))
    }

    async fn averages_for_movies(
        &self,
        movie_ids: &[MovieId],
    ) -> Result<Vec<RatingSummary>, StoreError> {
        let mut ids = movie_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();
        Ok(ids.into_iter().filter_map(|id| self.summarize(id)).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
