//! Per-team lineup views built from the cached roster snapshot.

use axum::extract::{Query, State};
use axum::Json;
use fantasy_core::league::validate_week;
use fantasy_core::overview::{team_overview, TeamOverview};
use fantasy_core::recommendation::{start_sit_for_team, validate_margin, StartSitReport};

use crate::error::AppResult;
use crate::league_data::roster_snapshot;
use crate::query::{StartSitParams, TeamParams};
use crate::state::AppState;

/// GET /team/overview
///
/// Trimmed starters and bench of one team. Unknown teams get an empty
/// placeholder with a `note`.
pub async fn overview(
    State(state): State<AppState>,
    Query(params): Query<TeamParams>,
) -> AppResult<Json<TeamOverview>> {
    let snapshot = roster_snapshot(&state, params.league_id, params.year).await?;
    let overview = team_overview(&snapshot, params.team_id);

    if overview.note.is_some() {
        tracing::info!(
            league_id = params.league_id,
            team_id = params.team_id,
            note = ?overview.note,
            "Team overview incomplete"
        );
    }

    Ok(Json(overview))
}

/// GET /start-sit
///
/// Bench-to-starter swaps whose projected gain is at least `margin`
/// (default 0.5), largest gain first.
pub async fn start_sit(
    State(state): State<AppState>,
    Query(params): Query<StartSitParams>,
) -> AppResult<Json<StartSitReport>> {
    validate_week(params.week)?;
    validate_margin(params.margin)?;

    let snapshot = roster_snapshot(&state, params.league_id, params.year).await?;
    let report = start_sit_for_team(&snapshot, params.team_id, params.week, params.margin);

    tracing::debug!(
        league_id = params.league_id,
        team_id = params.team_id,
        week = params.week,
        count = report.recommendations.len(),
        "Start/sit computed"
    );

    Ok(Json(report))
}
