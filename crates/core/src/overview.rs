//! Trimmed team views: the league's team list and a single team's lineup.

use serde::Serialize;

use crate::league::{LeagueSnapshot, PlayerId, RosterEntry, Team, TeamId};
use crate::lineup::{position_label, slot_label};
use crate::projection::{projection_for_week, round2};
use crate::roster::partition;

/// Entry of the team list returned on league initialisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub id: TeamId,
    pub name: String,
    pub abbrev: Option<String>,
}

impl From<&Team> for TeamSummary {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.display_name(),
            abbrev: team.abbrev.clone(),
        }
    }
}

pub fn team_summaries(snapshot: &LeagueSnapshot) -> Vec<TeamSummary> {
    snapshot.teams.iter().map(TeamSummary::from).collect()
}

/// A roster row reduced to what a lineup screen needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimmedPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub lineup_slot_id: i64,
    pub slot: &'static str,
    pub position: &'static str,
    pub injury_status: Option<String>,
    /// Projection for the league's current scoring period, when known.
    pub projection: Option<f64>,
}

impl TrimmedPlayer {
    fn from_entry(entry: &RosterEntry, week: Option<i64>) -> Self {
        let player = entry.player();
        Self {
            player_id: entry.player_id,
            name: player
                .map(|p| p.display_name())
                .unwrap_or_else(|| format!("Player {}", entry.player_id)),
            lineup_slot_id: entry.lineup_slot_id,
            slot: slot_label(entry.lineup_slot_id),
            position: player
                .and_then(|p| p.default_position_id)
                .map(position_label)
                .unwrap_or("UNKNOWN"),
            injury_status: player.and_then(|p| p.injury_status.clone()),
            projection: match (player, week) {
                (Some(p), Some(week)) => projection_for_week(p, week).map(round2),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamOverview {
    pub team_id: TeamId,
    pub team_name: Option<String>,
    pub scoring_period_id: Option<i64>,
    pub starters: Vec<TrimmedPlayer>,
    pub bench: Vec<TrimmedPlayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Build the trimmed lineup of one team.
///
/// An unknown team id yields an empty placeholder with a note.
pub fn team_overview(snapshot: &LeagueSnapshot, team_id: TeamId) -> TeamOverview {
    let week = snapshot.scoring_period_id;

    let Some(team) = snapshot.team(team_id) else {
        return TeamOverview {
            team_id,
            team_name: None,
            scoring_period_id: week,
            starters: Vec::new(),
            bench: Vec::new(),
            note: Some(format!("team {team_id} not found in league")),
        };
    };

    let (starters, bench) = partition(team.roster_entries());

    TeamOverview {
        team_id,
        team_name: Some(team.display_name()),
        scoring_period_id: week,
        starters: trim_all(&starters, week),
        bench: trim_all(&bench, week),
        note: team
            .roster
            .is_none()
            .then(|| "roster not available for team".to_string()),
    }
}

fn trim_all(entries: &[&RosterEntry], week: Option<i64>) -> Vec<TrimmedPlayer> {
    entries
        .iter()
        .map(|e| TrimmedPlayer::from_entry(e, week))
        .collect()
}
