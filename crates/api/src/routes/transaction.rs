//! Route definitions for the transaction ledger.
//!
//! Mounted at `/transaction` by `api_routes()`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::transaction;
use crate::state::AppState;

/// Transaction routes.
///
/// ```text
/// GET    /        -> list_transactions (?code, user_id, redeemable_name, cursor, limit, sort)
/// DELETE /{id}    -> delete_transaction
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(transaction::list_transactions))
        .route("/{id}", delete(transaction::delete_transaction))
}
