//! Carousel slide entity model and DTOs.

use hub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `carousel_items` table.
///
/// `image` is the media-host URL returned by the upload call, never a raw
/// client-supplied value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarouselItem {
    pub id: DbId,
    pub title: String,
    pub image: String,
    /// Render the slide caption in black instead of white.
    pub black: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new carousel slide. Built by the handler after the
/// image has been uploaded.
#[derive(Debug, Clone)]
pub struct CreateCarouselItem {
    pub title: String,
    pub image: String,
    pub black: bool,
}

/// DTO for updating an existing slide. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateCarouselItem {
    pub title: Option<String>,
    pub image: Option<String>,
    pub black: Option<bool>,
}
