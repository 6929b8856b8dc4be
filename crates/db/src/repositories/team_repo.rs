//! Repository for the `team_members` table.

use hub_core::types::DbId;
use sqlx::PgPool;

use crate::models::team::{CreateTeamMember, TeamMember, UpdateTeamMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, position, batch, image, quote";

/// Provides CRUD operations for team members.
pub struct TeamRepo;

impl TeamRepo {
    /// Insert a new team member, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTeamMember,
    ) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members (name, position, batch, image, quote)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.batch)
            .bind(&input.image)
            .bind(&input.quote)
            .fetch_one(pool)
            .await
    }

    /// Find a team member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all team members, most recently inserted first.
    ///
    /// The table has no `created_at`, so insertion order (id) stands in for
    /// creation time.
    pub async fn list(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members ORDER BY id DESC");
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(pool).await
    }

    /// Update a team member. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET
                name = COALESCE($2, name),
                position = COALESCE($3, position),
                batch = COALESCE($4, batch),
                image = COALESCE($5, image),
                quote = COALESCE($6, quote)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.position)
            .bind(&input.batch)
            .bind(&input.image)
            .bind(&input.quote)
            .fetch_optional(pool)
            .await
    }

    /// Delete a team member. Returns `false` if no row with the given `id`
    /// exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
