//! Handlers for the redeemable catalog and the redemption endpoint.
//!
//! Catalog writes are plain CRUD; the redemption endpoint is the one guarded
//! operation, delegating the balance check to `TransactionRepo::create`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use hackdesk_core::error::CoreError;
use hackdesk_core::ledger::validate_delta;
use hackdesk_core::pagination::{
    clamp_limit, RedeemableCursor, SortOrder, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
use hackdesk_core::redeemable::{
    validate_baseline_quantity, validate_competition_code, validate_description,
    validate_redeemable_name,
};
use hackdesk_db::models::redeemable::{CreateRedeemable, UpdateRedeemable};
use hackdesk_db::models::transaction::CreateTransaction;
use hackdesk_db::repositories::{RedeemableRepo, TransactionRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing redeemables.
#[derive(Debug, serde::Deserialize)]
pub struct RedeemableListParams {
    pub code: Option<String>,
    pub name: Option<String>,
    pub cursor_code: Option<String>,
    pub cursor_name: Option<String>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}

/// POST /redeemable
///
/// Create a catalog entry.
pub async fn create_redeemable(
    State(state): State<AppState>,
    Json(input): Json<CreateRedeemable>,
) -> AppResult<impl IntoResponse> {
    validate_competition_code(&input.competition_code)?;
    validate_redeemable_name(&input.name)?;
    validate_baseline_quantity(input.quantity)?;
    if let Some(ref description) = input.description {
        validate_description(description)?;
    }

    let redeemable = match RedeemableRepo::create(&state.pool, &input).await {
        Ok(row) => row,
        Err(err) if hackdesk_db::is_unique_violation(&err) => {
            return Err(CoreError::Conflict(format!(
                "Redeemable '{}' already exists for competition '{}'",
                input.name, input.competition_code
            ))
            .into());
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

    tracing::info!(
        competition_code = %redeemable.competition_code,
        name = %redeemable.name,
        quantity = redeemable.quantity,
        "Redeemable created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: redeemable })))
}

/// GET /redeemable/{code}/{name}
///
/// Fetch a single catalog entry.
pub async fn get_redeemable(
    State(state): State<AppState>,
    Path((code, name)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    let redeemable = RedeemableRepo::find(&state.pool, &code, &name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Redeemable",
                key: format!("{code}/{name}"),
            })
        })?;

    Ok(Json(DataResponse { data: redeemable }))
}

/// PUT /redeemable/{code}/{name}
///
/// Patch quantity and/or description. The identity pair is immutable.
pub async fn update_redeemable(
    State(state): State<AppState>,
    Path((code, name)): Path<(String, String)>,
    Json(input): Json<UpdateRedeemable>,
) -> AppResult<impl IntoResponse> {
    if let Some(quantity) = input.quantity {
        validate_baseline_quantity(quantity)?;
    }
    if let Some(ref description) = input.description {
        validate_description(description)?;
    }

    RedeemableRepo::update(&state.pool, &code, &name, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Redeemable",
                key: format!("{code}/{name}"),
            })
        })?;

    tracing::info!(competition_code = %code, name = %name, "Redeemable updated");

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /redeemable/{code}/{name}
///
/// Remove a catalog entry. Refused with 409 while ledger transactions still
/// reference it; history is never cascaded away.
pub async fn delete_redeemable(
    State(state): State<AppState>,
    Path((code, name)): Path<(String, String)>,
) -> AppResult<impl IntoResponse> {
    match RedeemableRepo::delete(&state.pool, &code, &name).await {
        Ok(true) => {
            tracing::info!(competition_code = %code, name = %name, "Redeemable deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => Err(CoreError::NotFound {
            entity: "Redeemable",
            key: format!("{code}/{name}"),
        }
        .into()),
        Err(err) if hackdesk_db::is_foreign_key_violation(&err) => Err(CoreError::Conflict(
            format!("Redeemable '{name}' still has ledger transactions"),
        )
        .into()),
        Err(err) => Err(err.into()),
    }
}

/// GET /redeemable?code=&name=&cursor_code=&cursor_name=&limit=&sort=
///
/// Paginated catalog listing. The cursor only takes effect when both
/// `cursor_code` and `cursor_name` are present.
pub async fn list_redeemables(
    State(state): State<AppState>,
    Query(params): Query<RedeemableListParams>,
) -> AppResult<impl IntoResponse> {
    let sort = SortOrder::from_param(params.sort.as_deref())?;
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let cursor = RedeemableCursor::from_parts(params.cursor_code, params.cursor_name);

    let redeemables = RedeemableRepo::list(
        &state.pool,
        params.code.as_deref(),
        params.name.as_deref(),
        cursor.as_ref(),
        limit,
        sort,
    )
    .await?;

    Ok(Json(DataResponse { data: redeemables }))
}

/// POST /redeemable/redeem
///
/// Append a transaction to the ledger: negative quantity redeems, positive
/// grants. Overdraw is rejected with 403 and writes nothing.
pub async fn redeem(
    State(state): State<AppState>,
    Json(input): Json<CreateTransaction>,
) -> AppResult<impl IntoResponse> {
    validate_delta(input.quantity)?;

    let transaction = TransactionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        transaction_id = transaction.id,
        competition_code = %transaction.competition_code,
        redeemable_name = %transaction.redeemable_name,
        user_id = %transaction.user_id,
        quantity = transaction.quantity,
        "Ledger transaction committed"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: transaction })))
}
