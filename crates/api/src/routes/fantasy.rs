//! Route definitions for the shaped fantasy views.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{league, matchup, team};
use crate::state::AppState;

/// Mounted at the root.
///
/// ```text
/// POST   /init               -> league::init
/// GET    /team/overview      -> team::overview
/// GET    /matchup/summary    -> matchup::summary
/// GET    /start-sit          -> team::start_sit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/init", post(league::init))
        .route("/team/overview", get(team::overview))
        .route("/matchup/summary", get(matchup::summary))
        .route("/start-sit", get(team::start_sit))
}
