//! Input validation for rating queries.
//!
//! Single lookups arrive as raw text tokens (path segment or query value);
//! batch lookups arrive as a raw request body. Both are turned into typed
//! values here, or into a [`CoreError::InvalidInput`] with a fixed message.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::{MovieId, RawMovieId};

pub const MOVIE_ID_REQUIRED: &str = "Movie ID is required";
pub const MOVIE_ID_NOT_POSITIVE: &str = "Movie ID cannot be negative";
pub const MOVIE_IDS_EMPTY: &str = "Movie IDs list cannot be null or empty";
pub const INVALID_MOVIE_ID_FORMAT: &str = "Invalid movie ID format. All IDs must be integers.";
pub const INVALID_BODY_FORMAT: &str = "Invalid request body format";

/// Parse and range-check a single movie ID token.
///
/// An absent or blank token is "required"; a token that is not a 32-bit
/// integer keeps its raw text in the message; a parsed value `<= 0` is
/// rejected by [`MovieId::new`].
pub fn parse_movie_id(raw: Option<&str>) -> Result<MovieId, CoreError> {
    let raw = match raw {
        Some(token) if !token.trim().is_empty() => token,
        _ => return Err(CoreError::InvalidInput(MOVIE_ID_REQUIRED.to_string())),
    };

    let parsed: RawMovieId = raw.parse().map_err(|_| {
        CoreError::InvalidInput(format!(
            "Failed to convert value '{raw}' to required type 'Integer'"
        ))
    })?;

    MovieId::new(parsed)
}

/// Decode a batch request body into raw movie IDs.
///
/// Returns `Ok(None)` for a JSON `null` body. A `null` element decodes to
/// `None` and matches no movie. Every other element must be a JSON integer
/// that fits in 32 bits; strings, floats and nested values are format
/// errors. Range is not checked here.
pub fn decode_movie_ids(body: &[u8]) -> Result<Option<Vec<Option<RawMovieId>>>, CoreError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| CoreError::InvalidInput(INVALID_BODY_FORMAT.to_string()))?;

    let elements = match value {
        Value::Null => return Ok(None),
        Value::Array(elements) => elements,
        _ => return Err(CoreError::InvalidInput(INVALID_BODY_FORMAT.to_string())),
    };

    elements
        .iter()
        .map(|element| match element {
            Value::Null => Ok(None),
            _ => element
                .as_i64()
                .and_then(|n| RawMovieId::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| CoreError::InvalidInput(INVALID_MOVIE_ID_FORMAT.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Reject a null or empty batch.
///
/// A list holding only `null` elements is not empty and passes.
pub fn require_movie_ids(
    movie_ids: Option<Vec<Option<RawMovieId>>>,
) -> Result<Vec<Option<RawMovieId>>, CoreError> {
    match movie_ids {
        Some(ids) if !ids.is_empty() => Ok(ids),
        _ => Err(CoreError::InvalidInput(MOVIE_IDS_EMPTY.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn invalid_message(err: CoreError) -> String {
        match err {
            CoreError::InvalidInput(msg) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn parses_positive_token() {
        assert_eq!(parse_movie_id(Some("42")).unwrap().get(), 42);
    }

    #[test]
    fn missing_token_is_required() {
        assert_eq!(invalid_message(parse_movie_id(None).unwrap_err()), MOVIE_ID_REQUIRED);
        assert_eq!(invalid_message(parse_movie_id(Some("")).unwrap_err()), MOVIE_ID_REQUIRED);
        assert_eq!(invalid_message(parse_movie_id(Some("  ")).unwrap_err()), MOVIE_ID_REQUIRED);
    }

    #[test]
    fn non_numeric_token_keeps_raw_text() {
        assert_eq!(
            invalid_message(parse_movie_id(Some("invalid")).unwrap_err()),
            "Failed to convert value 'invalid' to required type 'Integer'"
        );
        assert_eq!(
            invalid_message(parse_movie_id(Some("1.5")).unwrap_err()),
            "Failed to convert value '1.5' to required type 'Integer'"
        );
    }

    #[test]
    fn overflowing_token_is_a_conversion_failure() {
        assert_eq!(
            invalid_message(parse_movie_id(Some("3000000000")).unwrap_err()),
            "Failed to convert value '3000000000' to required type 'Integer'"
        );
    }

    #[test]
    fn non_positive_token_is_rejected() {
        assert_eq!(invalid_message(parse_movie_id(Some("-1")).unwrap_err()), MOVIE_ID_NOT_POSITIVE);
        assert_eq!(invalid_message(parse_movie_id(Some("0")).unwrap_err()), MOVIE_ID_NOT_POSITIVE);
    }

    #[test]
    fn decodes_integer_array_in_order() {
        assert_eq!(
            decode_movie_ids(b"[3, 1, 2, 1]").unwrap(),
            Some(vec![Some(3), Some(1), Some(2), Some(1)])
        );
    }

    #[test]
    fn decode_keeps_negative_ids_for_the_service() {
        assert_eq!(
            decode_movie_ids(b"[1, -2, 0]").unwrap(),
            Some(vec![Some(1), Some(-2), Some(0)])
        );
    }

    #[test]
    fn null_elements_decode_as_absent_ids() {
        assert_eq!(
            decode_movie_ids(b"[1, null, 3]").unwrap(),
            Some(vec![Some(1), None, Some(3)])
        );
        assert_eq!(decode_movie_ids(b"[null]").unwrap(), Some(vec![None]));
    }

    #[test]
    fn decodes_null_body_as_absent() {
        assert_eq!(decode_movie_ids(b"null").unwrap(), None);
    }

    #[test]
    fn decodes_empty_array() {
        assert_eq!(decode_movie_ids(b"[]").unwrap(), Some(vec![]));
    }

    #[test]
    fn rejects_non_integer_elements() {
        let bodies: [&[u8]; 5] = [
            b"[1, \"two\", 3]",
            b"[1.5]",
            b"[{\"id\": 1}]",
            b"[[1]]",
            b"[4294967296]",
        ];
        for body in bodies {
            assert_eq!(
                invalid_message(decode_movie_ids(body).unwrap_err()),
                INVALID_MOVIE_ID_FORMAT
            );
        }
    }

    #[test]
    fn rejects_malformed_body() {
        let bodies: [&[u8]; 4] = [b"invalid json", b"", b"{\"ids\": [1]}", b"7"];
        for body in bodies {
            assert_eq!(
                invalid_message(decode_movie_ids(body).unwrap_err()),
                INVALID_BODY_FORMAT
            );
        }
    }

    #[test]
    fn require_rejects_null_and_empty() {
        assert_matches!(require_movie_ids(None), Err(CoreError::InvalidInput(msg)) if msg == MOVIE_IDS_EMPTY);
        assert_matches!(require_movie_ids(Some(vec![])), Err(CoreError::InvalidInput(_)));
        assert_eq!(require_movie_ids(Some(vec![Some(5)])).unwrap(), vec![Some(5)]);
        assert_eq!(require_movie_ids(Some(vec![None])).unwrap(), vec![None]);
    }
}
