//! Request extractors shared by handlers.
//!
//! - [`context::RequestCtx`] -- Per-request correlation values for logging.

pub mod context;
