//! Handlers for the `/api/carousel` resource.
//!
//! Home-page hero slides: a title, a caption color flag, and one image
//! relayed to the media host.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hub_core::error::CoreError;
use hub_db::models::carousel::{CarouselItem, CreateCarouselItem, UpdateCarouselItem};
use hub_db::repositories::CarouselRepo;

use crate::error::{AppError, AppResult};
use crate::forms::SubmittedForm;
use crate::handlers::IdQuery;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Media host folder for carousel slides.
const MEDIA_FOLDER: &str = "carousel-images";

/// POST /api/carousel
///
/// Multipart: `title` (required), `black` (checkbox), `image` (required
/// file). The image is uploaded before the insert; an upload failure fails
/// the whole request and nothing is persisted.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<CarouselItem>>)> {
    let mut form = SubmittedForm::read(&mut multipart).await?;
    let title = form.require("title")?.to_string();
    let black = form.flag("black");
    let image_bytes = form.require_image()?;

    let image = state.media.upload(image_bytes, MEDIA_FOLDER).await?;

    let item = CarouselRepo::create(&state.pool, &CreateCarouselItem { title, image, black })
        .await?;

    tracing::info!(item_id = item.id, "Carousel slide created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// GET /api/carousel
///
/// All slides, most recent first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<CarouselItem>>>> {
    let items = CarouselRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: items }))
}

/// PUT /api/carousel?id={id}
///
/// Multipart with optional fields; absent fields are left unchanged. A new
/// image replaces the old asset: the upload happens first so a failed
/// upload leaves the record and its current image intact, then the old
/// asset is best-effort deleted.
pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<CarouselItem>>> {
    let id = params.require()?;
    let mut form = SubmittedForm::read(&mut multipart).await?;

    let existing = CarouselRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CarouselItem",
            id,
        }))?;

    let image = state
        .media
        .replace(&existing.image, form.take_image(), MEDIA_FOLDER)
        .await?;

    let input = UpdateCarouselItem {
        title: form.text("title").map(str::to_string),
        black: form.flag_opt("black"),
        image,
    };

    let item = CarouselRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CarouselItem",
            id,
        }))?;

    tracing::info!(item_id = id, "Carousel slide updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/carousel?id={id}
///
/// Best-effort deletes the remote asset, then removes the row. The row is
/// removed even when the remote delete fails.
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> AppResult<Json<MessageResponse>> {
    let id = params.require()?;

    let existing = CarouselRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CarouselItem",
            id,
        }))?;

    state.media.delete(&existing.image, MEDIA_FOLDER).await;
    CarouselRepo::delete(&state.pool, id).await?;

    tracing::info!(item_id = id, "Carousel slide deleted");

    Ok(Json(MessageResponse {
        message: "Carousel slide deleted",
    }))
}
