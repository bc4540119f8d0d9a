use std::fmt;

use crate::store::StoreError;
use crate::types::MovieId;

/// Which lookup a store failure happened in.
///
/// Carried by [`CoreError::InternalFailure`] so the boundary can name the
/// failing operation without seeing the store's internals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupScope {
    /// A single-movie lookup.
    Movie(MovieId),
    /// A batch lookup.
    Batch,
}

impl fmt::Display for LookupScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Movie(id) => write!(
                f,
                "An error occurred while retrieving the movie rating for ID: {id}"
            ),
            Self::Batch => write!(
                f,
                "An error occurred while retrieving movie ratings for the provided list of movie IDs."
            ),
        }
    }
}

/// Every way a rating query can fail.
///
/// A successful query is the `Ok` side of [`RatingQueryResult`], so the
/// full outcome space is `Found` plus these three variants.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Missing, malformed or out-of-range caller input.
    #[error("{0}")]
    InvalidInput(String),

    /// Valid input, but the movie has no ratings.
    #[error("Movie rating not found for ID: {movie_id}")]
    NotFound { movie_id: MovieId },

    /// The rating store failed underneath the query.
    #[error("{scope}")]
    InternalFailure {
        scope: LookupScope,
        #[source]
        source: StoreError,
    },
}

/// Outcome of a rating query.
pub type RatingQueryResult<T> = Result<T, CoreError>;

impl CoreError {
    /// HTTP-equivalent status code for this outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::NotFound { .. } => 404,
            Self::InternalFailure { .. } => 500,
        }
    }

    /// Extra context for error bodies. Empty when nothing applies.
    pub fn details(&self) -> String {
        match self {
            Self::InvalidInput(_) => String::new(),
            Self::NotFound { movie_id } => format!("Movie ID: {movie_id}"),
            Self::InternalFailure { scope, .. } => match scope {
                LookupScope::Movie(movie_id) => format!("Movie ID: {movie_id}"),
                LookupScope::Batch => "Error retrieving movies".to_string(),
            },
        }
    }
}
