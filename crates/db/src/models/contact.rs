//! Contact form submission entity model and DTOs.

use hub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `contact_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new contact submission (public contact form).
#[derive(Debug, Clone)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// DTO for updating a submission from the admin table view. All fields are
/// optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}
