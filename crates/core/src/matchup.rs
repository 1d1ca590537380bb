//! Weekly opponent lookup.

use serde::Serialize;

use crate::league::{LeagueSnapshot, MatchupSide, TeamId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opponent {
    pub team_id: TeamId,
    pub name: String,
    pub points: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupSummary {
    pub team_id: TeamId,
    pub week: i64,
    /// `"home"` or `"away"`; `None` when no matchup was found.
    pub side: Option<&'static str>,
    pub points: Option<f64>,
    /// `None` on a bye or when the team has no matchup that week.
    pub opponent: Option<Opponent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

fn side_team(side: &Option<MatchupSide>) -> Option<TeamId> {
    side.as_ref().and_then(|s| s.team_id)
}

fn side_points(side: &Option<MatchupSide>) -> Option<f64> {
    side.as_ref().and_then(|s| s.total_points)
}

/// Find `team_id`'s opponent in matchup period `week`.
///
/// The week is compared with `matchupPeriodId`, which equals the scoring
/// period in regular-season weeks. Playoff rounds that span two scoring
/// periods share one matchup period, so callers must pass the matchup period
/// number for those rounds.
pub fn matchup_summary(snapshot: &LeagueSnapshot, team_id: TeamId, week: i64) -> MatchupSummary {
    let found = snapshot.schedule.iter().find_map(|item| {
        if item.matchup_period_id != Some(week) {
            return None;
        }
        if side_team(&item.home) == Some(team_id) {
            Some(("home", &item.home, &item.away))
        } else if side_team(&item.away) == Some(team_id) {
            Some(("away", &item.away, &item.home))
        } else {
            None
        }
    });

    let Some((side, ours, theirs)) = found else {
        return MatchupSummary {
            team_id,
            week,
            side: None,
            points: None,
            opponent: None,
            note: Some(format!("no matchup found for team {team_id} in week {week}")),
        };
    };

    let opponent = side_team(theirs).map(|opponent_id| Opponent {
        team_id: opponent_id,
        name: snapshot
            .team(opponent_id)
            .map(|t| t.display_name())
            .unwrap_or_else(|| format!("Team {opponent_id}")),
        points: side_points(theirs),
    });
    let note = opponent.is_none().then(|| "bye week".to_string());

    MatchupSummary {
        team_id,
        week,
        side: Some(side),
        points: side_points(ours),
        opponent,
        note,
    }
}
