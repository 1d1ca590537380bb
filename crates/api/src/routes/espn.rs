//! Route definitions for the raw ESPN passthrough.

use axum::routing::get;
use axum::Router;

use crate::handlers::espn;
use crate::state::AppState;

/// Mounted at `/espn`.
///
/// ```text
/// GET    /league      -> league
/// GET    /matchups    -> matchups
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/league", get(espn::league))
        .route("/matchups", get(espn::matchups))
}
