//! Shared domain types for the movie catalogue service.

pub mod error;
pub mod types;
pub mod validation;
