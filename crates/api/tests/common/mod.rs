#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use ratings_api::config::{LogFormat, ServerConfig};
use ratings_api::router::build_app_router;
use ratings_api::state::AppState;
use ratings_core::service::RatingQueryService;
use ratings_core::store::memory::InMemoryRatingStore;
use ratings_core::store::{RatingStore, StoreError};
use ratings_core::types::{MovieId, Rating, RatingSummary};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        log_format: LogFormat::Text,
        db_max_connections: 1,
    }
}

/// Ratings used by most API tests:
///
/// - movie 1: 9.0, 8.5, 9.2 -> 8.9 over 3 ratings
/// - movie 2: 4.0, 5.0 -> 4.5 over 2 ratings
/// - everything else unrated
pub fn sample_ratings() -> Vec<Rating> {
    [(1, 9.0), (1, 8.5), (1, 9.2), (2, 4.0), (2, 5.0)]
        .into_iter()
        .enumerate()
        .map(|(i, (movie_id, rating))| Rating {
            rating_id: i as i32 + 1,
            user_id: 100 + i as i32,
            movie_id,
            rating,
            timestamp: 1_700_000_000 + i as i64,
        })
        .collect()
}

/// A store whose every call fails, for exercising the 500 paths.
pub struct FailingStore;

#[async_trait]
impl RatingStore for FailingStore {
    async fn average_for_movie(
        &self,
        _movie_id: MovieId,
    ) -> Result<Option<RatingSummary>, StoreError> {
        Err(StoreError::Unavailable("Database error".into()))
    }

    async fn averages_for_movies(
        &self,
        _movie_ids: &[MovieId],
    ) -> Result<Vec<RatingSummary>, StoreError> {
        Err(StoreError::Unavailable("Database error".into()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("Database error".into()))
    }
}

/// Build the full application router over the given store.
///
/// Uses the same [`build_app_router`] as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(store: Arc<dyn RatingStore>) -> Router {
    let state = AppState {
        ratings: RatingQueryService::new(store),
    };
    build_app_router(state, &test_config())
}

/// Router over [`sample_ratings`].
pub fn sample_app() -> Router {
    build_test_app(Arc::new(InMemoryRatingStore::new(sample_ratings())))
}

/// Router whose store always fails.
pub fn failing_app() -> Router {
    build_test_app(Arc::new(FailingStore))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
