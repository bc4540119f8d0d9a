use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::MOVIE_ID_NOT_POSITIVE;

/// Raw movie identifiers are 32-bit, matching the `INTEGER` column.
pub type RawMovieId = i32;

/// A strictly positive movie identifier.
///
/// Construction goes through [`MovieId::new`], so holding a `MovieId` means
/// the range check has already passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct MovieId(RawMovieId);

impl MovieId {
    /// Validate a parsed identifier. Zero and negative values are rejected.
    pub fn new(raw: RawMovieId) -> Result<Self, CoreError> {
        if raw <= 0 {
            return Err(CoreError::InvalidInput(MOVIE_ID_NOT_POSITIVE.to_string()));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> RawMovieId {
        self.0
    }
}

impl TryFrom<i32> for MovieId {
    type Error = CoreError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<MovieId> for i32 {
    fn from(id: MovieId) -> Self {
        id.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregated rating for one movie.
///
/// Only exists for movies with at least one rating; there is no zero or
/// placeholder summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    pub movie_id: MovieId,
    /// Mean of all ratings, rounded to one decimal place.
    pub average_rating: f64,
    /// Number of ratings behind the mean, when the store reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<i64>,
}

impl RatingSummary {
    pub fn new(movie_id: MovieId, average_rating: f64, rating_count: Option<i64>) -> Self {
        Self {
            movie_id,
            average_rating,
            rating_count,
        }
    }
}

/// A single stored rating, one row of the `ratings` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub rating_id: i32,
    pub user_id: i32,
    pub movie_id: RawMovieId,
    pub rating: f64,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

/// Round a mean to one decimal place, half away from zero.
///
/// Matches PostgreSQL's `ROUND(numeric, 1)` so every store reports the same
/// value for the same ratings.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn movie_id_accepts_positive_values() {
        assert_eq!(MovieId::new(1).unwrap().get(), 1);
        assert_eq!(MovieId::new(i32::MAX).unwrap().get(), i32::MAX);
    }

    #[test]
    fn movie_id_rejects_zero_and_negative() {
        assert_matches!(MovieId::new(0), Err(CoreError::InvalidInput(msg)) if msg == "Movie ID cannot be negative");
        assert_matches!(MovieId::new(-7), Err(CoreError::InvalidInput(_)));
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = RatingSummary::new(MovieId::new(1).unwrap(), 8.9, Some(2500));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "movieId": 1, "averageRating": 8.9, "ratingCount": 2500 })
        );
    }

    #[test]
    fn summary_omits_unknown_count() {
        let summary = RatingSummary::new(MovieId::new(3).unwrap(), 4.5, None);
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("ratingCount").is_none());
    }

    #[test]
    fn summary_deserialization_rejects_non_positive_id() {
        let result: Result<RatingSummary, _> =
            serde_json::from_str(r#"{"movieId":0,"averageRating":1.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenth(8.94), 8.9);
        assert_eq!(round_to_tenth(8.96), 9.0);
        assert_eq!(round_to_tenth(4.25), 4.3);
        assert_eq!(round_to_tenth(3.0), 3.0);
    }
}
