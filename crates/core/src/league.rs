//! Typed view of the ESPN league document.
//!
//! Only the fields the shaping logic reads are modelled. Everything ESPN
//! may omit is an `Option` or defaults to empty, so a sparse document (e.g.
//! one fetched without the `mRoster` view) still deserializes.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// ESPN player identifier.
pub type PlayerId = i64;

/// ESPN team identifier (unique within a league).
pub type TeamId = i64;

/// `statSourceId` of a projected (as opposed to actual) stat line.
pub const STAT_SOURCE_PROJECTED: i64 = 1;

/// One per-period stat line embedded in a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatRecord {
    pub scoring_period_id: Option<i64>,
    pub stat_source_id: Option<i64>,
    /// League-scoring-adjusted total.
    pub applied_total: Option<f64>,
    pub season_id: Option<i64>,
}

impl StatRecord {
    /// A projection line that actually carries a total.
    pub fn is_usable_projection(&self) -> bool {
        self.stat_source_id == Some(STAT_SOURCE_PROJECTED) && self.applied_total.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ownership {
    pub percent_owned: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub id: PlayerId,
    pub full_name: Option<String>,
    pub default_position_id: Option<i64>,
    /// Lineup slot ids this player may occupy, in ESPN order.
    pub eligible_slots: Vec<i64>,
    pub injury_status: Option<String>,
    pub stats: Vec<StatRecord>,
    pub ownership: Option<Ownership>,
}

impl Player {
    /// Display name, falling back to the numeric id.
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => format!("Player {}", self.id),
        }
    }

    pub fn is_eligible_for(&self, slot_id: i64) -> bool {
        self.eligible_slots.contains(&slot_id)
    }

    pub fn percent_owned(&self) -> Option<f64> {
        self.ownership.as_ref().and_then(|o| o.percent_owned)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerPoolEntry {
    pub player: Option<Player>,
}

/// One row of a team roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterEntry {
    pub player_id: PlayerId,
    pub lineup_slot_id: i64,
    pub player_pool_entry: Option<PlayerPoolEntry>,
}

impl RosterEntry {
    /// The embedded player, if ESPN included one.
    pub fn player(&self) -> Option<&Player> {
        self.player_pool_entry
            .as_ref()
            .and_then(|entry| entry.player.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Roster {
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Team {
    pub id: TeamId,
    pub name: Option<String>,
    pub location: Option<String>,
    pub nickname: Option<String>,
    pub abbrev: Option<String>,
    pub roster: Option<Roster>,
}

impl Team {
    /// Human-readable team name.
    ///
    /// Newer seasons carry `name`; older ones split it into `location` and
    /// `nickname`.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().map(str::trim) {
            if !name.is_empty() {
                return name.to_string();
            }
        }

        let joined = format!(
            "{} {}",
            self.location.as_deref().unwrap_or_default(),
            self.nickname.as_deref().unwrap_or_default()
        );
        let joined = joined.trim();
        if joined.is_empty() {
            format!("Team {}", self.id)
        } else {
            joined.to_string()
        }
    }

    /// Roster entries, empty when the roster view was not requested.
    pub fn roster_entries(&self) -> &[RosterEntry] {
        self.roster
            .as_ref()
            .map(|r| r.entries.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchupSide {
    pub team_id: Option<TeamId>,
    pub total_points: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleItem {
    pub id: Option<i64>,
    pub matchup_period_id: Option<i64>,
    pub home: Option<MatchupSide>,
    pub away: Option<MatchupSide>,
    pub winner: Option<String>,
}

/// The subset of a league document the proxy shapes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeagueSnapshot {
    pub id: Option<i64>,
    pub season_id: Option<i64>,
    /// The league's current scoring period.
    pub scoring_period_id: Option<i64>,
    pub teams: Vec<Team>,
    pub schedule: Vec<ScheduleItem>,
}

impl LeagueSnapshot {
    /// Interpret an upstream document.
    pub fn from_document(document: &serde_json::Value) -> Result<Self, CoreError> {
        Ok(Self::deserialize(document)?)
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }
}

/// Scoring periods are numbered from 1.
pub fn validate_week(week: i64) -> Result<(), CoreError> {
    if week < 1 {
        return Err(CoreError::Validation(format!(
            "week must be 1 or greater, got {week}"
        )));
    }
    Ok(())
}
