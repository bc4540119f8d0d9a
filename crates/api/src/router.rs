//! Router assembly for the ratings API.
//!
//! [`build_app_router`] is shared by `main.rs` and the integration tests, so
//! both run the same routes behind the same layers. Every request is traced
//! in a `request` span carrying its `request_id` and `client_ref_id`, which
//! tags every event logged while it is handled, including the tower-http
//! response events and the error log in [`crate::error`].

use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::config::ServerConfig;
use crate::middleware::context::{context_from_headers, CLIENT_REF_ID_HEADER, REQUEST_ID_HEADER};
use crate::routes;
use crate::state::AppState;

/// Build the ratings service router.
///
/// Layers, outermost first: CORS, request ID assignment, request span,
/// request ID echo on the response, timeout, panic recovery. The request ID
/// is assigned before the span opens so the span can record it.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(build_cors_layer(config))
        .with_state(state)
}

/// Open the span for one request, tagged with its correlation IDs.
///
/// Reads the same headers as the `RequestCtx` extractor, so the IDs on the
/// span and the ones passed to the query service always agree.
fn request_span(request: &Request<Body>) -> Span {
    let ctx = context_from_headers(request.headers());
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = ctx.request_id(),
        client_ref_id = ctx.client_ref_id(),
    )
}

/// CORS for browser callers: GET and POST only, and the `clientRefId`
/// header may be sent cross-origin.
///
/// Panics on an unparsable origin so a bad `CORS_ORIGINS` stops the server
/// before it binds.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{origin}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(CLIENT_REF_ID_HEADER)])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
