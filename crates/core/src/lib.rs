//! Shared domain types for the One Partners site backend.

pub mod error;
pub mod types;
