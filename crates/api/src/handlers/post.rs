//! Handlers for the `/api/post` resource.
//!
//! Instagram-style feed posts shown on the home page. Tags arrive as one
//! comma-separated form field and are stored split, untrimmed, in order.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hub_core::error::CoreError;
use hub_core::validation::split_tags;
use hub_db::models::post::{CreatePost, Post, UpdatePost};
use hub_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::forms::SubmittedForm;
use crate::handlers::IdQuery;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Media host folder for feed post images.
const MEDIA_FOLDER: &str = "insta-posta";

/// POST /api/post
///
/// Multipart: `title`, `description`, `tags` (comma-separated), `image`
/// file -- all required.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Post>>)> {
    let mut form = SubmittedForm::read(&mut multipart).await?;
    let title = form.require("title")?.to_string();
    let description = form.require("description")?.to_string();
    let tags = split_tags(form.require("tags")?);
    let image_bytes = form.require_image()?;

    let image = state.media.upload(image_bytes, MEDIA_FOLDER).await?;

    let post = PostRepo::create(
        &state.pool,
        &CreatePost {
            title,
            description,
            tags,
            image,
        },
    )
    .await?;

    tracing::info!(post_id = post.id, "Post created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// GET /api/post
///
/// All posts, most recent first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Post>>>> {
    let posts = PostRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// PUT /api/post?id={id}
///
/// Multipart with optional fields. Supplying only `tags` re-splits that
/// field and leaves title/description/image untouched.
pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<Post>>> {
    let id = params.require()?;
    let mut form = SubmittedForm::read(&mut multipart).await?;

    let existing = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    let image = state
        .media
        .replace(&existing.image, form.take_image(), MEDIA_FOLDER)
        .await?;

    let input = UpdatePost {
        title: form.text("title").map(str::to_string),
        description: form.text("description").map(str::to_string),
        tags: form.text("tags").map(split_tags),
        image,
    };

    let post = PostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    tracing::info!(post_id = id, "Post updated");

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/post?id={id}
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> AppResult<Json<MessageResponse>> {
    let id = params.require()?;

    let existing = PostRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Post", id }))?;

    state.media.delete(&existing.image, MEDIA_FOLDER).await;
    PostRepo::delete(&state.pool, id).await?;

    tracing::info!(post_id = id, "Post deleted");

    Ok(Json(MessageResponse {
        message: "Post deleted",
    }))
}
