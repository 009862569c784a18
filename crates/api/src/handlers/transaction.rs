//! Handlers for the transaction ledger's read/correct surface.
//!
//! Appending happens through the redemption endpoint; this module only
//! lists and deletes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use hackdesk_core::error::CoreError;
use hackdesk_core::pagination::{clamp_limit, SortOrder, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use hackdesk_core::types::DbId;
use hackdesk_db::models::transaction::TransactionFilter;
use hackdesk_db::repositories::TransactionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for listing transactions.
#[derive(Debug, serde::Deserialize)]
pub struct TransactionListParams {
    pub code: Option<String>,
    pub user_id: Option<String>,
    pub redeemable_name: Option<String>,
    pub cursor: Option<DbId>,
    pub limit: Option<i64>,
    pub sort: Option<String>,
}

/// GET /transaction?code=&user_id=&redeemable_name=&cursor=&limit=&sort=
///
/// Paginated ledger listing with attendee and redeemable display fields.
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(params): Query<TransactionListParams>,
) -> AppResult<impl IntoResponse> {
    let sort = SortOrder::from_param(params.sort.as_deref())?;
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let filter = TransactionFilter {
        competition_code: params.code,
        user_id: params.user_id,
        redeemable_name: params.redeemable_name,
    };

    let transactions =
        TransactionRepo::list(&state.pool, &filter, params.cursor, limit, sort).await?;

    Ok(Json(DataResponse { data: transactions }))
}

/// DELETE /transaction/{id}
///
/// Administrative correction: deletes unconditionally, without re-validating
/// the remaining ledger. Removing a delta never lowers a past balance below
/// what was checked, so the non-negative invariant holds.
pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TransactionRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Transaction",
            key: id.to_string(),
        }
        .into());
    }

    tracing::info!(transaction_id = id, "Ledger transaction deleted");

    Ok(StatusCode::NO_CONTENT)
}
