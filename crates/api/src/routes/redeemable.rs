//! Route definitions for the redeemable catalog.
//!
//! Mounted at `/redeemable` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::redeemable;
use crate::state::AppState;

/// Redeemable routes.
///
/// ```text
/// GET    /                  -> list_redeemables (?code, name, cursor_code, cursor_name, limit, sort)
/// POST   /                  -> create_redeemable
/// POST   /redeem            -> redeem
/// GET    /{code}/{name}     -> get_redeemable
/// PUT    /{code}/{name}     -> update_redeemable
/// DELETE /{code}/{name}     -> delete_redeemable
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(redeemable::list_redeemables).post(redeemable::create_redeemable),
        )
        .route("/redeem", post(redeemable::redeem))
        .route(
            "/{code}/{name}",
            get(redeemable::get_redeemable)
                .put(redeemable::update_redeemable)
                .delete(redeemable::delete_redeemable),
        )
}
