//! Unit tests against the public formatting and fetch helpers

pub mod api;
pub mod formatting;
