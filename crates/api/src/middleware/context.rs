//! Request-context extractor for Axum handlers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use ratings_core::context::RequestContext;

/// Header carrying the caller's reference ID. Header names are matched
/// case-insensitively, so `clientRefId` on the wire matches.
pub const CLIENT_REF_ID_HEADER: &str = "clientrefid";

/// Header set by `SetRequestIdLayer` before handlers run.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// The [`RequestContext`] of the current request.
///
/// Never rejects: missing or non-UTF-8 headers just leave the field empty.
///
/// ```ignore
/// async fn my_handler(RequestCtx(ctx): RequestCtx) -> AppResult<Json<()>> {
///     tracing::info!(client_ref_id = ctx.client_ref_id(), "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequestCtx(pub RequestContext);

impl<S> FromRequestParts<S> for RequestCtx
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestCtx(context_from_headers(&parts.headers)))
    }
}

/// Build a [`RequestContext`] from the correlation headers.
pub(crate) fn context_from_headers(headers: &HeaderMap) -> RequestContext {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());

    RequestContext::new()
        .with_client_ref_id(header(CLIENT_REF_ID_HEADER))
        .with_request_id(header(REQUEST_ID_HEADER))
}
