use ratings_core::service::RatingQueryService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the service only holds an `Arc` to its store.
#[derive(Clone)]
pub struct AppState {
    /// Rating queries over the configured store.
    pub ratings: RatingQueryService,
}
