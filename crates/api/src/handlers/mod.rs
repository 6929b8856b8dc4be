//! HTTP handlers, one module per resource.

pub mod auth;
pub mod carousel;
pub mod contact;
pub mod health;
pub mod post;
pub mod team;

use hub_core::error::CoreError;
use hub_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Record identifier supplied out-of-band as the `?id=` query parameter,
/// shared by every update/delete endpoint.
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<DbId>,
}

impl IdQuery {
    /// The id, or a 400 naming the missing parameter.
    pub fn require(&self) -> AppResult<DbId> {
        self.id
            .ok_or_else(|| AppError::BadRequest("id query parameter is required".into()))
    }
}

/// Require a non-empty string field from a JSON body.
pub(crate) fn require_text(value: Option<String>, name: &'static str) -> AppResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::Core(CoreError::Validation(format!(
            "{name} is required"
        )))),
    }
}
