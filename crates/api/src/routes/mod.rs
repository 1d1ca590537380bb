pub mod espn;
pub mod fantasy;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /healthz                       liveness
///
/// /espn/league                   raw league document (views)
/// /espn/matchups                 raw matchup document (week)
///
/// /init                          team list (POST, cached)
/// /team/overview                 trimmed lineup of one team
/// /matchup/summary               weekly opponent of one team
/// /start-sit                     ranked swap recommendations
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/espn", espn::router())
        .merge(fantasy::router())
}
