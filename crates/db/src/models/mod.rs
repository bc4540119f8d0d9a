//! Row structs read from `ratings` queries.

pub mod rating;
