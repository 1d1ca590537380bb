//! Start/sit recommendations.
//!
//! For every starter, look for the bench player eligible for the same
//! lineup slot with the highest ranking score. A swap is proposed when that
//! score beats the starter's by at least the caller's margin.

use serde::Serialize;

use crate::error::CoreError;
use crate::league::{LeagueSnapshot, Player, PlayerId, RosterEntry, TeamId};
use crate::lineup::slot_label;
use crate::projection::{ranking_score, round2};
use crate::roster::partition;

/// Margin applied when the caller does not pass one.
pub const DEFAULT_MARGIN: f64 = 0.5;

/// One side of a proposed swap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapPlayer {
    pub player_id: PlayerId,
    pub name: String,
    /// Rounded to two decimals.
    pub projection: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub slot_id: i64,
    pub slot: &'static str,
    pub outgoing: SwapPlayer,
    pub incoming: SwapPlayer,
    /// `incoming - outgoing`, rounded to two decimals.
    pub delta: f64,
}

/// Start/sit answer for one team and week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartSitReport {
    pub team_id: TeamId,
    pub week: i64,
    pub margin: f64,
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Reject margins that would make every comparison meaningless.
pub fn validate_margin(margin: f64) -> Result<(), CoreError> {
    if !margin.is_finite() {
        return Err(CoreError::Validation(format!(
            "margin must be a finite number, got {margin}"
        )));
    }
    Ok(())
}

/// Propose bench-to-starter swaps, best improvement first.
///
/// Entries without an embedded player are skipped. A bench player may be
/// proposed for several starters. Comparisons use unrounded scores; only the
/// reported numbers are rounded.
pub fn recommend(
    starters: &[&RosterEntry],
    bench: &[&RosterEntry],
    week: i64,
    margin: f64,
) -> Vec<Recommendation> {
    let mut scored: Vec<(f64, Recommendation)> = Vec::new();

    for starter in starters {
        let Some(outgoing) = starter.player() else {
            continue;
        };
        let slot_id = starter.lineup_slot_id;
        let starter_score = ranking_score(outgoing, week);

        let mut best: (Option<&Player>, f64) = (None, starter_score);
        for candidate in bench.iter().filter_map(|b| b.player()) {
            if !candidate.is_eligible_for(slot_id) {
                continue;
            }
            let score = ranking_score(candidate, week);
            if score > best.1 {
                best = (Some(candidate), score);
            }
        }

        let (Some(incoming), incoming_score) = best else {
            continue;
        };
        let delta = incoming_score - starter_score;
        if delta < margin {
            continue;
        }

        scored.push((
            delta,
            Recommendation {
                slot_id,
                slot: slot_label(slot_id),
                outgoing: SwapPlayer {
                    player_id: outgoing.id,
                    name: outgoing.display_name(),
                    projection: round2(starter_score),
                },
                incoming: SwapPlayer {
                    player_id: incoming.id,
                    name: incoming.display_name(),
                    projection: round2(incoming_score),
                },
                delta: round2(delta),
            },
        ));
    }

    // Stable, so equal deltas keep roster order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, rec)| rec).collect()
}

/// Run [`recommend`] against one team of a league snapshot.
///
/// A team id missing from the snapshot yields an empty report with a note
/// rather than an error.
pub fn start_sit_for_team(
    snapshot: &LeagueSnapshot,
    team_id: TeamId,
    week: i64,
    margin: f64,
) -> StartSitReport {
    let Some(team) = snapshot.team(team_id) else {
        return StartSitReport {
            team_id,
            week,
            margin,
            recommendations: Vec::new(),
            note: Some(format!("team {team_id} not found in league")),
        };
    };

    let (starters, bench) = partition(team.roster_entries());
    let recommendations = recommend(&starters, &bench, week, margin);
    let note = if team.roster.is_none() {
        Some("roster not available for team".to_string())
    } else {
        None
    };

    StartSitReport {
        team_id,
        week,
        margin,
        recommendations,
        note,
    }
}
