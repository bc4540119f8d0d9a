//! Batch query planning and result reconciliation.

use std::collections::{HashMap, HashSet};

use crate::types::{MovieId, RatingSummary, RawMovieId};

/// A batch lookup after normalisation.
///
/// Holds the distinct positive movie IDs in order of first appearance.
/// Null and non-positive IDs can never carry ratings, so they are dropped
/// here and simply never show up in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRatingQuery {
    movie_ids: Vec<MovieId>,
    nulls: usize,
    skipped: usize,
    duplicates: usize,
}

impl BatchRatingQuery {
    pub fn from_raw(raw_ids: &[Option<RawMovieId>]) -> Self {
        let mut seen = HashSet::with_capacity(raw_ids.len());
        let mut movie_ids = Vec::with_capacity(raw_ids.len());
        let mut nulls = 0;
        let mut skipped = 0;
        let mut duplicates = 0;

        for &raw in raw_ids {
            let Some(raw) = raw else {
                nulls += 1;
                continue;
            };
            let Ok(movie_id) = MovieId::new(raw) else {
                skipped += 1;
                continue;
            };
            if seen.insert(movie_id) {
                movie_ids.push(movie_id);
            } else {
                duplicates += 1;
            }
        }

        Self {
            movie_ids,
            nulls,
            skipped,
            duplicates,
        }
    }

    /// Distinct IDs to send to the store.
    pub fn movie_ids(&self) -> &[MovieId] {
        &self.movie_ids
    }

    pub fn is_empty(&self) -> bool {
        self.movie_ids.is_empty()
    }

    /// Number of `null` entries dropped from the request.
    pub fn nulls(&self) -> usize {
        self.nulls
    }

    /// Number of non-positive IDs dropped from the request.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of repeated IDs collapsed.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Match store output back against the request.
    ///
    /// The result has at most one summary per requested movie, in request
    /// order. Summaries for movies that were not requested are discarded, and
    /// if the store repeats a movie the first summary wins.
    pub fn reconcile(&self, summaries: Vec<RatingSummary>) -> Vec<RatingSummary> {
        let mut by_movie: HashMap<MovieId, RatingSummary> = HashMap::with_capacity(summaries.len());
        for summary in summaries {
            by_movie.entry(summary.movie_id).or_insert(summary);
        }

        self.movie_ids
            .iter()
            .filter_map(|movie_id| by_movie.remove(movie_id))
            .collect()
    }
}
