//! Feed post entity model and DTOs.

use hub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub description: String,
    /// Comma-split from the admin form input, stored in submission order.
    pub tags: Vec<String>,
    pub image: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new post. Built by the handler after the image upload.
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
}

/// DTO for updating an existing post. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub image: Option<String>,
}
