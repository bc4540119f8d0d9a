//! Domain layer for the movie ratings query service.
//!
//! Holds the typed data model, input validation, the error taxonomy, the
//! [`store::RatingStore`] seam and the [`service::RatingQueryService`] that
//! ties them together. Nothing in here knows about HTTP or SQL.

pub mod batch;
pub mod context;
pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
