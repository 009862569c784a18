//! Handlers for attendee registration and check-in.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use hackdesk_core::error::CoreError;
use hackdesk_db::models::attendee::CreateAttendee;
use hackdesk_db::repositories::AttendeeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing attendees.
#[derive(Debug, serde::Deserialize)]
pub struct AttendeeListParams {
    pub code: String,
}

/// POST /attendee
pub async fn create_attendee(
    State(state): State<AppState>,
    Json(input): Json<CreateAttendee>,
) -> AppResult<impl IntoResponse> {
    if input.id.trim().is_empty() {
        return Err(CoreError::Validation("id must not be empty".to_string()).into());
    }
    if input.display_name.trim().is_empty() {
        return Err(CoreError::Validation("display_name must not be empty".to_string()).into());
    }

    let attendee = match AttendeeRepo::create(&state.pool, &input).await {
        Ok(row) => row,
        Err(err) if hackdesk_db::is_unique_violation(&err) => {
            return Err(
                CoreError::Conflict(format!("Attendee '{}' already exists", input.id)).into(),
            );
        }
        Err(err) if hackdesk_db::is_foreign_key_violation(&err) => {
            return Err(CoreError::NotFound {
                entity: "Competition",
                key: input.competition_code.clone(),
            }
            .into());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(attendee_id = %attendee.id, "Attendee registered");

    Ok((StatusCode::CREATED, Json(DataResponse { data: attendee })))
}

/// GET /attendee/{id}
pub async fn get_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let attendee = AttendeeRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Attendee",
                key: id.clone(),
            })
        })?;

    Ok(Json(DataResponse { data: attendee }))
}

/// GET /attendee?code=
pub async fn list_attendees(
    State(state): State<AppState>,
    Query(params): Query<AttendeeListParams>,
) -> AppResult<impl IntoResponse> {
    let attendees = AttendeeRepo::list_by_competition(&state.pool, &params.code).await?;
    Ok(Json(DataResponse { data: attendees }))
}

/// PATCH /attendee/{id}/check-in
///
/// Idempotent: scanning an already checked-in badge is not an error.
pub async fn check_in_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let attendee = AttendeeRepo::set_checked_in(&state.pool, &id, true)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Attendee",
                key: id.clone(),
            })
        })?;

    tracing::info!(attendee_id = %attendee.id, "Attendee checked in");

    Ok(Json(DataResponse { data: attendee }))
}

/// DELETE /attendee/{id}
///
/// Refused with 409 while ledger transactions still reference the attendee.
pub async fn delete_attendee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    match AttendeeRepo::delete(&state.pool, &id).await {
        Ok(true) => {
            tracing::info!(attendee_id = %id, "Attendee deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => Err(CoreError::NotFound {
            entity: "Attendee",
            key: id,
        }
        .into()),
        Err(err) if hackdesk_db::is_foreign_key_violation(&err) => Err(CoreError::Conflict(
            format!("Attendee '{id}' still has ledger transactions"),
        )
        .into()),
        Err(err) => Err(err.into()),
    }
}
