use axum::extract::{Query, State};
use axum::Json;
use fantasy_core::league::{validate_week, LeagueSnapshot};
use fantasy_core::matchup::{matchup_summary, MatchupSummary};
use fantasy_espn::LeagueRequest;

use crate::error::AppResult;
use crate::query::TeamWeekParams;
use crate::state::AppState;

/// GET /matchup/summary
///
/// The team's opponent and points for one week. Always read fresh: scores
/// move during a game week.
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<TeamWeekParams>,
) -> AppResult<Json<MatchupSummary>> {
    validate_week(params.week)?;

    let request = LeagueRequest::new(params.league_id, params.year)
        .views(["mMatchup", "mTeam"])
        .scoring_period(params.week);
    let document = state.espn.fetch_league(&request).await?;
    let snapshot = LeagueSnapshot::from_document(&document)?;

    Ok(Json(matchup_summary(&snapshot, params.team_id, params.week)))
}
