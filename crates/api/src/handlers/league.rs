//! League initialisation.

use axum::extract::{Query, State};
use axum::Json;
use fantasy_core::overview::{team_summaries, TeamSummary};
use serde::Serialize;

use crate::error::AppResult;
use crate::league_data::team_snapshot;
use crate::query::LeagueParams;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct InitResponse {
    pub league_id: i64,
    pub year: i32,
    pub teams: Vec<TeamSummary>,
}

/// POST /init
///
/// List the league's teams so a client can pick one. The underlying
/// document is cached for the init TTL.
pub async fn init(
    State(state): State<AppState>,
    Query(params): Query<LeagueParams>,
) -> AppResult<Json<InitResponse>> {
    let snapshot = team_snapshot(&state, params.league_id, params.year).await?;
    let teams = team_summaries(&snapshot);

    tracing::info!(
        league_id = params.league_id,
        year = params.year,
        team_count = teams.len(),
        "League initialised"
    );

    Ok(Json(InitResponse {
        league_id: params.league_id,
        year: params.year,
        teams,
    }))
}
