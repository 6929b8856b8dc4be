//! Handlers for the `/api/contact` resource.
//!
//! The only resource written by the public site (the contact form); the
//! admin table view reads, edits, and deletes submissions. JSON bodies, no
//! media involvement.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use hub_core::error::CoreError;
use hub_db::models::contact::{ContactMessage, CreateContactMessage, UpdateContactMessage};
use hub_db::repositories::ContactRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::{require_text, IdQuery};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Request body for `POST /api/contact`. All fields required.
#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// Request body for `PUT /api/contact?id={id}`. All fields optional; empty
/// strings are treated as absent, matching the admin form.
#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// POST /api/contact
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContactRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ContactMessage>>)> {
    let submission = CreateContactMessage {
        name: require_text(input.name, "name")?,
        email: require_text(input.email, "email")?,
        message: require_text(input.message, "message")?,
    };

    let contact = ContactRepo::create(&state.pool, &submission).await?;

    tracing::info!(contact_id = contact.id, "Contact submission created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: contact })))
}

/// GET /api/contact
///
/// All submissions, most recent first.
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ContactMessage>>>> {
    let contacts = ContactRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: contacts }))
}

/// PUT /api/contact?id={id}
pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
    Json(input): Json<UpdateContactRequest>,
) -> AppResult<Json<DataResponse<ContactMessage>>> {
    let id = params.require()?;

    if ContactRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }));
    }

    let input = UpdateContactMessage {
        name: input.name.filter(|v| !v.is_empty()),
        email: input.email.filter(|v| !v.is_empty()),
        message: input.message.filter(|v| !v.is_empty()),
    };

    let contact = ContactRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))?;

    tracing::info!(contact_id = id, "Contact submission updated");

    Ok(Json(DataResponse { data: contact }))
}

/// DELETE /api/contact?id={id}
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdQuery>,
) -> AppResult<Json<MessageResponse>> {
    let id = params.require()?;

    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }));
    }

    tracing::info!(contact_id = id, "Contact submission deleted");

    Ok(Json(MessageResponse {
        message: "Contact submission deleted",
    }))
}
