//! Cached reads of the league documents the shaping handlers work from.

use std::time::Duration;

use fantasy_core::league::LeagueSnapshot;
use fantasy_espn::LeagueRequest;

use crate::cache::{cache_key, INIT_KEY, ROSTER_KEY};
use crate::error::AppResult;
use crate::state::AppState;

/// Views making up the team list document.
pub const TEAM_VIEWS: &[&str] = &["mTeam"];

/// Views making up the roster snapshot document.
pub const ROSTER_VIEWS: &[&str] = &["mRoster", "mTeam"];

/// Team list of a league season, cached for the init TTL.
pub async fn team_snapshot(
    state: &AppState,
    league_id: i64,
    year: i32,
) -> AppResult<LeagueSnapshot> {
    cached_snapshot(
        state,
        cache_key(INIT_KEY, league_id, year),
        state.config.cache.init,
        LeagueRequest::new(league_id, year).views(TEAM_VIEWS.iter().copied()),
    )
    .await
}

/// Rosters of every team in a league season, cached for the roster TTL.
pub async fn roster_snapshot(
    state: &AppState,
    league_id: i64,
    year: i32,
) -> AppResult<LeagueSnapshot> {
    cached_snapshot(
        state,
        cache_key(ROSTER_KEY, league_id, year),
        state.config.cache.roster,
        LeagueRequest::new(league_id, year).views(ROSTER_VIEWS.iter().copied()),
    )
    .await
}

/// Serve `key` from the cache, or fetch, interpret and store it.
///
/// A document is stored only once it has been interpreted, so a malformed
/// response is not served again from the cache.
async fn cached_snapshot(
    state: &AppState,
    key: String,
    ttl: Duration,
    request: LeagueRequest,
) -> AppResult<LeagueSnapshot> {
    if let Some(document) = state.cache.get(&key, ttl).await {
        tracing::debug!(%key, "League cache hit");
        return Ok(LeagueSnapshot::from_document(&document)?);
    }

    tracing::debug!(%key, "League cache miss");
    let document = state.espn.fetch_league(&request).await?;
    let snapshot = LeagueSnapshot::from_document(&document)?;
    state.cache.put(key, document).await;
    Ok(snapshot)
}
