//! Per-request diagnostic context.
//!
//! Built by the boundary layer for each inbound call and passed explicitly
//! into the service. It only feeds log fields; no query behaviour depends on
//! it.

/// Correlation values attached to one inbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    client_ref_id: Option<String>,
    request_id: Option<String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the caller-supplied reference ID. Blank values are ignored and
    /// surrounding whitespace is trimmed.
    pub fn with_client_ref_id(mut self, client_ref_id: Option<&str>) -> Self {
        self.client_ref_id = non_blank(client_ref_id);
        self
    }

    /// Attach the server-assigned request ID.
    pub fn with_request_id(mut self, request_id: Option<&str>) -> Self {
        self.request_id = non_blank(request_id);
        self
    }

    pub fn client_ref_id(&self) -> Option<&str> {
        self.client_ref_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
