//! The rating query service.
//!
//! Validates caller input, queries the [`RatingStore`], and reconciles the
//! store's output into the public result. Validation always runs before the
//! store is touched.

use std::sync::Arc;

use crate::batch::BatchRatingQuery;
use crate::context::RequestContext;
use crate::error::{CoreError, LookupScope, RatingQueryResult};
use crate::store::RatingStore;
use crate::types::{RatingSummary, RawMovieId};
use crate::validation;

/// Stateless front for the two rating queries.
///
/// Cheap to clone; the only field is a shared handle to the store.
#[derive(Clone)]
pub struct RatingQueryService {
    store: Arc<dyn RatingStore>,
}

impl RatingQueryService {
    pub fn new(store: Arc<dyn RatingStore>) -> Self {
        Self { store }
    }

    /// The underlying store, for health reporting.
    pub fn store(&self) -> &Arc<dyn RatingStore> {
        &self.store
    }

    /// Average rating for a single movie.
    ///
    /// `movie_id` is the raw token exactly as the caller sent it, or `None`
    /// when no token was supplied.
    pub async fn get_rating(
        &self,
        ctx: &RequestContext,
        movie_id: Option<&str>,
    ) -> RatingQueryResult<RatingSummary> {
        let movie_id = validation::parse_movie_id(movie_id).inspect_err(|err| {
            tracing::debug!(
                client_ref_id = ctx.client_ref_id(),
                request_id = ctx.request_id(),
                raw = movie_id,
                reason = %err,
                "Rejected movie rating lookup",
            );
        })?;

        match self.store.average_for_movie(movie_id).await {
            Ok(Some(summary)) => {
                tracing::info!(
                    client_ref_id = ctx.client_ref_id(),
                    request_id = ctx.request_id(),
                    movie_id = movie_id.get(),
                    average_rating = summary.average_rating,
                    "Retrieved movie rating",
                );
                Ok(summary)
            }
            Ok(None) => {
                tracing::info!(
                    client_ref_id = ctx.client_ref_id(),
                    request_id = ctx.request_id(),
                    movie_id = movie_id.get(),
                    "No ratings for movie",
                );
                Err(CoreError::NotFound { movie_id })
            }
            Err(source) => {
                tracing::error!(
                    client_ref_id = ctx.client_ref_id(),
                    request_id = ctx.request_id(),
                    movie_id = movie_id.get(),
                    error = %source,
                    "Rating store failed during movie lookup",
                );
                Err(CoreError::InternalFailure {
                    scope: LookupScope::Movie(movie_id),
                    source,
                })
            }
        }
    }

    /// Average ratings for a batch of movies.
    ///
    /// `movie_ids` is the already-decoded request list; `None` stands for a
    /// null list and a `None` element for a null entry. Movies without
    /// ratings, null entries and non-positive IDs are left out of the result.
    /// The result is in order of first appearance in the request and never
    /// repeats a movie.
    pub async fn get_batch_ratings(
        &self,
        ctx: &RequestContext,
        movie_ids: Option<Vec<Option<RawMovieId>>>,
    ) -> RatingQueryResult<Vec<RatingSummary>> {
        let raw_ids = validation::require_movie_ids(movie_ids).inspect_err(|err| {
            tracing::debug!(
                client_ref_id = ctx.client_ref_id(),
                request_id = ctx.request_id(),
                reason = %err,
                "Rejected batch rating lookup",
            );
        })?;

        let query = BatchRatingQuery::from_raw(&raw_ids);
        tracing::info!(
            client_ref_id = ctx.client_ref_id(),
            request_id = ctx.request_id(),
            requested = raw_ids.len(),
            distinct = query.movie_ids().len(),
            nulls = query.nulls(),
            skipped = query.skipped(),
            duplicates = query.duplicates(),
            "Retrieving movie ratings for batch",
        );

        if query.is_empty() {
            return Ok(Vec::new());
        }

        let summaries = self
            .store
            .averages_for_movies(query.movie_ids())
            .await
            .map_err(|source| {
                tracing::error!(
                    client_ref_id = ctx.client_ref_id(),
                    request_id = ctx.request_id(),
                    requested = query.movie_ids().len(),
                    error = %source,
                    "Rating store failed during batch lookup",
                );
                CoreError::InternalFailure {
                    scope: LookupScope::Batch,
                    source,
                }
            })?;

        let result = query.reconcile(summaries);
        tracing::debug!(
            client_ref_id = ctx.client_ref_id(),
            request_id = ctx.request_id(),
            found = result.len(),
            "Batch rating lookup complete",
        );
        Ok(result)
    }
}
