//! Shared query parameter types for API handlers.
//!
//! Every route is scoped to one league season; the structs below add the
//! team, week and tuning parameters individual routes need. A missing or
//! unparseable parameter is rejected by the `Query` extractor with 400.

use fantasy_core::league::TeamId;
use fantasy_core::recommendation::DEFAULT_MARGIN;
use serde::Deserialize;

/// `?league_id=&year=`
#[derive(Debug, Deserialize)]
pub struct LeagueParams {
    pub league_id: i64,
    pub year: i32,
}

/// `?league_id=&year=&views=`; `views` is comma-separated.
#[derive(Debug, Deserialize)]
pub struct LeagueViewsParams {
    pub league_id: i64,
    pub year: i32,
    pub views: Option<String>,
}

/// `?league_id=&year=&week=`
#[derive(Debug, Deserialize)]
pub struct LeagueWeekParams {
    pub league_id: i64,
    pub year: i32,
    pub week: i64,
}

/// `?league_id=&year=&team_id=`
#[derive(Debug, Deserialize)]
pub struct TeamParams {
    pub league_id: i64,
    pub year: i32,
    pub team_id: TeamId,
}

/// `?league_id=&year=&team_id=&week=`
#[derive(Debug, Deserialize)]
pub struct TeamWeekParams {
    pub league_id: i64,
    pub year: i32,
    pub team_id: TeamId,
    pub week: i64,
}

/// `?league_id=&year=&team_id=&week=&margin=`
#[derive(Debug, Deserialize)]
pub struct StartSitParams {
    pub league_id: i64,
    pub year: i32,
    pub team_id: TeamId,
    pub week: i64,
    #[serde(default = "default_margin")]
    pub margin: f64,
}

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}
