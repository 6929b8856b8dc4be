//! Shared domain types, errors, and validation rules for the campus-hub
//! backend. This crate has no I/O; everything here is usable from both the
//! database layer and the HTTP layer.

pub mod error;
pub mod types;
pub mod validation;
