//! Route tree for the API.

pub mod attendee;
pub mod competition;
pub mod health;
pub mod redeemable;
pub mod transaction;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /redeemable                       list, create
/// /redeemable/redeem                append a ledger transaction (POST)
/// /redeemable/{code}/{name}         get, update, delete
///
/// /transaction                      list
/// /transaction/{id}                 delete
///
/// /competition                      list, create
/// /competition/{code}               get, delete
///
/// /attendee                         list (?code), create
/// /attendee/{id}                    get, delete
/// /attendee/{id}/check-in           check in (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/redeemable", redeemable::router())
        .nest("/transaction", transaction::router())
        .nest("/competition", competition::router())
        .nest("/attendee", attendee::router())
}
