//! Team member entity model and DTOs.

use hub_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `team_members` table.
///
/// This table has no `created_at`; listing falls back to insertion order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub position: String,
    /// One of [`hub_core::validation::TEAM_BATCHES`]; the store enforces
    /// the same set with a CHECK constraint.
    pub batch: String,
    pub image: String,
    pub quote: String,
}

/// DTO for creating a new team member.
#[derive(Debug, Clone)]
pub struct CreateTeamMember {
    pub name: String,
    pub position: String,
    pub batch: String,
    pub image: String,
    pub quote: String,
}

/// DTO for updating an existing team member. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub position: Option<String>,
    pub batch: Option<String>,
    pub image: Option<String>,
    pub quote: Option<String>,
}
