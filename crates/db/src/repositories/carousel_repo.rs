//! Repository for the `carousel_items` table.

use hub_core::types::DbId;
use sqlx::PgPool;

use crate::models::carousel::{CarouselItem, CreateCarouselItem, UpdateCarouselItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, image, black, created_at";

/// Provides CRUD operations for carousel slides.
pub struct CarouselRepo;

impl CarouselRepo {
    /// Insert a new slide, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCarouselItem,
    ) -> Result<CarouselItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO carousel_items (title, image, black)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarouselItem>(&query)
            .bind(&input.title)
            .bind(&input.image)
            .bind(input.black)
            .fetch_one(pool)
            .await
    }

    /// Find a slide by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CarouselItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM carousel_items WHERE id = $1");
        sqlx::query_as::<_, CarouselItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all slides, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<CarouselItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM carousel_items ORDER BY created_at DESC");
        sqlx::query_as::<_, CarouselItem>(&query).fetch_all(pool).await
    }

    /// Update a slide. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCarouselItem,
    ) -> Result<Option<CarouselItem>, sqlx::Error> {
        let query = format!(
            "UPDATE carousel_items SET
                title = COALESCE($2, title),
                image = COALESCE($3, image),
                black = COALESCE($4, black)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarouselItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image)
            .bind(input.black)
            .fetch_optional(pool)
            .await
    }

    /// Delete a slide. Returns `false` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM carousel_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
