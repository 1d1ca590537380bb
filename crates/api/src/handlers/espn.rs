//! Raw passthrough of ESPN league documents.

use axum::extract::{Query, State};
use axum::Json;
use fantasy_espn::api::DEFAULT_LEAGUE_VIEWS;
use fantasy_espn::{parse_views, LeagueRequest};

use crate::error::AppResult;
use crate::query::{LeagueViewsParams, LeagueWeekParams};
use crate::state::AppState;

/// GET /espn/league
///
/// Forward the league document restricted to the requested views
/// (default `mRoster,mMatchup,mTeam`).
pub async fn league(
    State(state): State<AppState>,
    Query(params): Query<LeagueViewsParams>,
) -> AppResult<Json<serde_json::Value>> {
    let views = match params.views.as_deref() {
        Some(raw) => parse_views(raw),
        None => DEFAULT_LEAGUE_VIEWS.iter().map(|v| v.to_string()).collect(),
    };

    let request = LeagueRequest::new(params.league_id, params.year).views(views);
    let document = state.espn.fetch_league(&request).await?;

    Ok(Json(document))
}

/// GET /espn/matchups
///
/// Forward the `mMatchup` view for one scoring period. The week is passed
/// to ESPN as given.
pub async fn matchups(
    State(state): State<AppState>,
    Query(params): Query<LeagueWeekParams>,
) -> AppResult<Json<serde_json::Value>> {
    let request = LeagueRequest::new(params.league_id, params.year)
        .views(["mMatchup"])
        .scoring_period(params.week);
    let document = state.espn.fetch_league(&request).await?;

    Ok(Json(document))
}
