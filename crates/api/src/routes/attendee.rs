//! Route definitions for attendees.
//!
//! Mounted at `/attendee` by `api_routes()`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::attendee;
use crate::state::AppState;

/// Attendee routes.
///
/// ```text
/// GET    /                  -> list_attendees (?code)
/// POST   /                  -> create_attendee
/// GET    /{id}              -> get_attendee
/// DELETE /{id}              -> delete_attendee
/// PATCH  /{id}/check-in     -> check_in_attendee
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(attendee::list_attendees).post(attendee::create_attendee),
        )
        .route(
            "/{id}",
            get(attendee::get_attendee).delete(attendee::delete_attendee),
        )
        .route("/{id}/check-in", patch(attendee::check_in_attendee))
}
