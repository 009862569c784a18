//! Route definitions for competitions.
//!
//! Mounted at `/competition` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::competition;
use crate::state::AppState;

/// Competition routes.
///
/// ```text
/// GET    /         -> list_competitions
/// POST   /         -> create_competition
/// GET    /{code}   -> get_competition
/// DELETE /{code}   -> delete_competition
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(competition::list_competitions).post(competition::create_competition),
        )
        .route(
            "/{code}",
            get(competition::get_competition).delete(competition::delete_competition),
        )
}
