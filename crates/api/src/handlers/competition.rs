//! Handlers for competition CRUD.
//!
//! Competitions scope the redeemable catalog; the ledger only needs them as
//! foreign-key targets, so the surface is intentionally small.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use hackdesk_core::error::CoreError;
use hackdesk_core::redeemable::validate_competition_code;
use hackdesk_db::models::competition::CreateCompetition;
use hackdesk_db::repositories::CompetitionRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /competition
pub async fn create_competition(
    State(state): State<AppState>,
    Json(input): Json<CreateCompetition>,
) -> AppResult<impl IntoResponse> {
    validate_competition_code(&input.code)?;
    if input.name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".to_string()).into());
    }

    let competition = match CompetitionRepo::create(&state.pool, &input).await {
        Ok(row) => row,
        Err(err) if hackdesk_db::is_unique_violation(&err) => {
            return Err(CoreError::Conflict(format!(
                "Competition '{}' already exists",
                input.code
            ))
            .into());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(code = %competition.code, "Competition created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: competition })))
}

/// GET /competition/{code}
pub async fn get_competition(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    let competition = CompetitionRepo::find_by_code(&state.pool, &code)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Competition",
                key: code.clone(),
            })
        })?;

    Ok(Json(DataResponse { data: competition }))
}

/// GET /competition
pub async fn list_competitions(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let competitions = CompetitionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: competitions }))
}

/// DELETE /competition/{code}
///
/// Refused with 409 while attendees or redeemables still reference it.
pub async fn delete_competition(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> AppResult<impl IntoResponse> {
    match CompetitionRepo::delete(&state.pool, &code).await {
        Ok(true) => {
            tracing::info!(code = %code, "Competition deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => Err(CoreError::NotFound {
            entity: "Competition",
            key: code,
        }
        .into()),
        Err(err) if hackdesk_db::is_foreign_key_violation(&err) => Err(CoreError::Conflict(
            format!("Competition '{code}' still has attendees or redeemables"),
        )
        .into()),
        Err(err) => Err(err.into()),
    }
}
