//! Handlers for the `/api/team` resource.
//!
//! Core-team members shown on the about page. `batch` is constrained to
//! the fixed cohort list; validation runs before any upload or insert so a
//! bad batch never costs a remote call.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hub_core::error::CoreError;
use hub_core::validation::validate_batch;
use hub_db::models::team::{CreateTeamMember, TeamMember, UpdateTeamMember};
use hub_db::repositories::TeamRepo;

use crate::error::{AppError, AppResult};
use crate::forms::SubmittedForm;
use crate::handlers::IdQuery;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Media host folder for team member portraits.
const MEDIA_FOLDER: &str = "team-members";

/// POST /api/team
///
/// Multipart: `name`, `position`, `batch`, `quote`, `image` file -- all
/// required.
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<TeamMember>>)> {
    let mut form = SubmittedForm::read(&mut multipart).await?;
    let name = form.require("name")?.to_string();
    let position = form.require("position")?.to_string();
    let batch = form.require("batch")?.to_string();
    let quote = form.require("quote")?.to_string();
    let image_bytes = form.require_image()?;

    validate_batch(&batch)?;

    let image = state.media.upload(image_bytes, MEDIA_FOLDER).await?;

    let member = TeamRepo::create(
        &state.pool,
        &CreateTeamMember {
            name,
            position,
            batch,
            image,
            quote,
        },
    )
    .await?;

    tracing::info!(member_id = member.id, "Team member created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// GET /api/team
///
/// All members, most recently added first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<TeamMember>>>> {
    let members = TeamRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: members }))
}

/// PUT /api/team?id={id}
///
/// Multipart with optional fields; a supplied `batch` is validated against
/// the cohort list before anything else happens.
pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<TeamMember>>> {
    let id = params.require()?;
    let mut form = SubmittedForm::read(&mut multipart).await?;

    let batch = form.text("batch").map(str::to_string);
    if let Some(batch) = &batch {
        validate_batch(batch)?;
    }

    let existing = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;

    let image = state
        .media
        .replace(&existing.image, form.take_image(), MEDIA_FOLDER)
        .await?;

    let input = UpdateTeamMember {
        name: form.text("name").map(str::to_string),
        position: form.text("position").map(str::to_string),
        batch,
        image,
        quote: form.text("quote").map(str::to_string),
    };

    let member = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;

    tracing::info!(member_id = id, "Team member updated");

    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/team?id={id}
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> AppResult<Json<MessageResponse>> {
    let id = params.require()?;

    let existing = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id,
        }))?;

    state.media.delete(&existing.image, MEDIA_FOLDER).await;
    TeamRepo::delete(&state.pool, id).await?;

    tracing::info!(member_id = id, "Team member deleted");

    Ok(Json(MessageResponse {
        message: "Team member deleted",
    }))
}
